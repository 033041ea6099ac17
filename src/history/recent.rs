//! Recently watched buffer
//!
//! Keeps the last `capacity` titles a viewer played. Once the buffer is full,
//! every new title pushes out the oldest one, so the contents are always the
//! most recent titles in the order they were watched.

use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Default number of titles kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Fixed-capacity FIFO of recently observed items
#[derive(Debug, Clone)]
pub struct RecencyBuffer {
    /// Maximum number of items held
    capacity: usize,
    /// Held items, oldest at the front
    items: VecDeque<String>,
}

/// Watch history of a single viewer
pub type RecentlyWatched = RecencyBuffer;

impl RecencyBuffer {
    /// Create a buffer holding at most `capacity` items
    ///
    /// Returns `InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity must be greater than zero"));
        }

        Ok(Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        })
    }

    /// Record an item
    ///
    /// Blank items are rejected and leave the buffer untouched. When the
    /// buffer is full the oldest item is evicted first.
    pub fn add(&mut self, item: impl Into<String>) -> Result<()> {
        let item = item.into();
        if item.trim().is_empty() {
            return Err(Error::invalid("item cannot be empty"));
        }

        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Snapshot of the current contents, most recent last
    pub fn history(&self) -> Vec<String> {
        self.items.iter().cloned().collect()
    }

    /// Iterate over the contents, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// The most recently added item
    pub fn latest(&self) -> Option<&str> {
        self.items.back().map(String::as_str)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the next add will evict
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }
}

impl Default for RecencyBuffer {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            items: VecDeque::with_capacity(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(range: std::ops::RangeInclusive<u32>) -> Vec<String> {
        range.map(|i| format!("Movie{}", i)).collect()
    }

    #[test]
    fn test_add_and_history() {
        let mut buffer = RecencyBuffer::new(3).unwrap();
        buffer.add("Movie1").unwrap();
        buffer.add("Movie2").unwrap();
        buffer.add("Movie3").unwrap();
        assert_eq!(buffer.history(), vec!["Movie1", "Movie2", "Movie3"]);

        // Full buffer drops Movie1
        buffer.add("Movie4").unwrap();
        assert_eq!(buffer.history(), vec!["Movie2", "Movie3", "Movie4"]);
    }

    #[test]
    fn test_default_capacity_scenario() {
        let mut buffer = RecentlyWatched::default();
        for title in titles(1..=6) {
            buffer.add(title).unwrap();
        }

        assert_eq!(buffer.history(), titles(2..=6));
        assert_eq!(buffer.latest(), Some("Movie6"));
    }

    #[test]
    fn test_length_is_min_of_added_and_capacity() {
        for capacity in 1..=6 {
            for added in 0..=10u32 {
                let mut buffer = RecencyBuffer::new(capacity).unwrap();
                for i in 1..=added {
                    buffer.add(format!("Movie{}", i)).unwrap();
                }

                let history = buffer.history();
                assert_eq!(history.len(), (added as usize).min(capacity));

                let first_kept = added as usize - history.len() + 1;
                let expected: Vec<String> = (first_kept..=added as usize)
                    .map(|i| format!("Movie{}", i))
                    .collect();
                assert_eq!(history, expected);
            }
        }
    }

    #[test]
    fn test_evicts_exactly_one_oldest() {
        let mut buffer = RecencyBuffer::new(2).unwrap();
        buffer.add("a").unwrap();
        buffer.add("b").unwrap();
        assert!(buffer.is_full());

        buffer.add("c").unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.iter().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut buffer = RecencyBuffer::new(3).unwrap();
        buffer.add("Movie1").unwrap();
        buffer.add("Movie1").unwrap();
        assert_eq!(buffer.history(), vec!["Movie1", "Movie1"]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = RecencyBuffer::new(0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_blank_item_rejected_without_change() {
        let mut buffer = RecencyBuffer::new(2).unwrap();
        buffer.add("Movie1").unwrap();

        assert!(buffer.add("").unwrap_err().is_invalid_argument());
        assert!(buffer.add("   ").unwrap_err().is_invalid_argument());
        assert_eq!(buffer.history(), vec!["Movie1"]);
    }

    #[test]
    fn test_history_is_a_snapshot() {
        let mut buffer = RecencyBuffer::new(2).unwrap();
        buffer.add("Movie1").unwrap();

        let snapshot = buffer.history();
        buffer.add("Movie2").unwrap();

        assert_eq!(snapshot, vec!["Movie1"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = RecencyBuffer::new(4).unwrap();
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
        assert_eq!(buffer.capacity(), 4);
        assert!(buffer.latest().is_none());
        assert!(buffer.history().is_empty());
    }
}
