//! Comments grouped by video
//!
//! Maps a key (a video ID) to the entries posted under it. Groups are created
//! on the first write and only ever grow. Keys iterate in the order they were
//! first written.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Append-only store of entries grouped by key
#[derive(Debug, Clone, Default)]
pub struct GroupedLogStore {
    /// Groups in first-seen order
    groups: Vec<(String, Vec<String>)>,
    /// Key to position in `groups`
    index: HashMap<String, usize>,
}

/// Viewer comments keyed by video ID
pub type CommentStore = GroupedLogStore;

impl GroupedLogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the group for `key`
    ///
    /// Both arguments must be non-blank; a rejected call changes nothing.
    pub fn add(&mut self, key: impl Into<String>, entry: impl Into<String>) -> Result<()> {
        let key = key.into();
        let entry = entry.into();

        if key.trim().is_empty() {
            return Err(Error::invalid("key cannot be empty"));
        }
        if entry.trim().is_empty() {
            return Err(Error::invalid("entry cannot be empty"));
        }

        match self.index.get(&key) {
            Some(&pos) => self.groups[pos].1.push(entry),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![entry]));
            }
        }
        Ok(())
    }

    /// Entries for `key` in insertion order (empty if unseen)
    pub fn get(&self, key: &str) -> Vec<String> {
        self.entries(key).to_vec()
    }

    /// Borrowed view of the entries for `key`
    pub fn entries(&self, key: &str) -> &[String] {
        self.index
            .get(key)
            .map(|&pos| self.groups[pos].1.as_slice())
            .unwrap_or(&[])
    }

    /// Snapshot of every group, keys in first-seen order
    pub fn all(&self) -> Vec<(String, Vec<String>)> {
        self.groups.clone()
    }

    /// Iterate over groups without copying
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of entries across all groups
    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut store = CommentStore::new();
        store.add("VID101", "Great!").unwrap();
        store.add("VID101", "Waiting").unwrap();
        store.add("VID202", "Amazing!").unwrap();

        assert_eq!(store.get("VID101"), vec!["Great!", "Waiting"]);
        assert_eq!(store.get("VID202"), vec!["Amazing!"]);
        assert!(store.get("VID303").is_empty());
    }

    #[test]
    fn test_all_preserves_first_seen_order() {
        let mut store = GroupedLogStore::new();
        store.add("key1", "entry1").unwrap();
        store.add("key2", "entry3").unwrap();
        store.add("key1", "entry2").unwrap();

        assert_eq!(
            store.all(),
            vec![
                ("key1".to_string(), vec!["entry1".to_string(), "entry2".to_string()]),
                ("key2".to_string(), vec!["entry3".to_string()]),
            ]
        );
    }

    #[test]
    fn test_get_unknown_key_does_not_create_group() {
        let mut store = GroupedLogStore::new();
        store.add("VID1", "Nice").unwrap();

        assert!(store.get("VID9").is_empty());
        assert!(store.entries("VID9").is_empty());

        assert_eq!(store.len(), 1);
        assert!(!store.contains_key("VID9"));
    }

    #[test]
    fn test_blank_arguments_rejected() {
        let mut store = GroupedLogStore::new();

        assert!(store.add("", "Comment").unwrap_err().is_invalid_argument());
        assert!(store.add("VID1", "").unwrap_err().is_invalid_argument());
        assert!(store.add("  ", "Comment").unwrap_err().is_invalid_argument());
        assert!(store.add("VID1", "\t").unwrap_err().is_invalid_argument());

        assert!(store.is_empty());
        assert_eq!(store.total_entries(), 0);
    }

    #[test]
    fn test_every_key_has_entries() {
        let mut store = GroupedLogStore::new();
        store.add("VID1", "a").unwrap();
        let _ = store.add("VID2", "");
        store.add("VID3", "b").unwrap();

        assert!(store.iter().all(|(_, entries)| !entries.is_empty()));
        assert_eq!(
            store.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            vec!["VID1", "VID3"]
        );
        assert_eq!(store.total_entries(), 2);
    }
}
