//! Catalog movie records
//!
//! Records come from loosely-typed sources (JSON feeds, hand-written
//! fixtures), so every field is optional and `duration` tolerates strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime as it appears in the source data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Runtime {
    /// Whole minutes
    Minutes(i64),
    /// Text such as `"200"`
    Text(String),
    /// Anything else (floats, booleans, objects)
    Other(Value),
}

impl Runtime {
    /// Minutes this runtime counts for
    ///
    /// Negative and non-numeric values count as zero.
    pub fn minutes(&self) -> u64 {
        match self {
            Runtime::Minutes(m) => (*m).max(0) as u64,
            Runtime::Text(s) => s.trim().parse::<i64>().map(|m| m.max(0) as u64).unwrap_or(0),
            Runtime::Other(_) => 0,
        }
    }
}

impl From<i64> for Runtime {
    fn from(minutes: i64) -> Self {
        Runtime::Minutes(minutes)
    }
}

/// A single catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    /// Content rating label, e.g. `PG-13`
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub duration: Option<Runtime>,
}

impl MovieRecord {
    /// Create a fully populated record
    pub fn new(title: &str, genre: &str, rating: &str, duration: i64) -> Self {
        Self {
            title: Some(title.to_string()),
            genre: Some(genre.to_string()),
            rating: Some(rating.to_string()),
            duration: Some(Runtime::Minutes(duration)),
        }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the rating
    pub fn rating(mut self, rating: &str) -> Self {
        self.rating = Some(rating.to_string());
        self
    }

    /// Set the duration in minutes
    pub fn duration(mut self, minutes: i64) -> Self {
        self.duration = Some(Runtime::Minutes(minutes));
        self
    }

    /// Set the raw runtime value
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.duration = Some(runtime);
        self
    }

    /// Minutes this record contributes to a playlist total
    pub fn minutes(&self) -> u64 {
        self.duration.as_ref().map(Runtime::minutes).unwrap_or(0)
    }
}

/// The built-in demo catalog
pub fn sample_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new("Interstellar", "Sci-Fi", "PG-13", 169),
        MovieRecord::new("Finding Nemo", "Animation", "G", 100),
        MovieRecord::new("The Conjuring", "Horror", "R", 112),
        MovieRecord::new("Avengers", "Action", "PG-13", 143),
        MovieRecord::new("Toy Story", "Animation", "G", 81),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_durations() {
        let records: Vec<MovieRecord> = serde_json::from_str(
            r#"[
                {"title": "A", "duration": 100},
                {"title": "B", "duration": "200"},
                {"title": "C", "duration": "abc"},
                {"title": "D", "duration": null},
                {"title": "E", "duration": 1.5},
                {}
            ]"#,
        )
        .unwrap();

        let minutes: Vec<u64> = records.iter().map(MovieRecord::minutes).collect();
        assert_eq!(minutes, vec![100, 200, 0, 0, 0, 0]);
        assert!(records[3].duration.is_none());
        assert!(records[5].title.is_none());
    }

    #[test]
    fn test_negative_minutes_count_as_zero() {
        assert_eq!(Runtime::Minutes(-50).minutes(), 0);
        assert_eq!(Runtime::Text(" -5 ".into()).minutes(), 0);
        assert_eq!(Runtime::Text(" 42 ".into()).minutes(), 42);
    }

    #[test]
    fn test_sample_movies() {
        let movies = sample_movies();
        assert_eq!(movies.len(), 5);
        assert_eq!(movies[0].title.as_deref(), Some("Interstellar"));
        assert_eq!(movies[2].rating.as_deref(), Some("R"));
    }
}
