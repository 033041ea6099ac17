//! Catalog processing for recommendations
//!
//! Title-to-rating lookup, playlist runtime, and the kids profile filter.

use std::collections::HashMap;

use super::movie::MovieRecord;

/// Title used when a record has none
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Rating used when a record has none
pub const NOT_RATED: &str = "NR";

/// Rating excluded from kids profiles
const RESTRICTED_RATING: &str = "R";

/// Map each title to its rating
///
/// Titles and ratings are trimmed. Later records overwrite earlier ones with
/// the same title.
pub fn lookup_table(movies: &[MovieRecord]) -> HashMap<String, String> {
    movies
        .iter()
        .map(|movie| {
            let title = movie.title.as_deref().map(str::trim).unwrap_or(UNKNOWN_TITLE);
            let rating = movie.rating.as_deref().map(str::trim).unwrap_or(NOT_RATED);
            (title.to_string(), rating.to_string())
        })
        .collect()
}

/// Total runtime of a playlist in minutes
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn total_duration(playlist: &[MovieRecord]) -> u64 {
    playlist
        .iter()
        .fold(0u64, |total, movie| total.saturating_add(movie.minutes()))
}

/// Drop R-rated titles
///
/// The rating comparison ignores case and surrounding whitespace. Unrated
/// records are kept.
pub fn kids_profile_filter(movies: &[MovieRecord]) -> Vec<MovieRecord> {
    movies
        .iter()
        .filter(|movie| !is_restricted(movie))
        .cloned()
        .collect()
}

fn is_restricted(movie: &MovieRecord) -> bool {
    movie
        .rating
        .as_deref()
        .is_some_and(|rating| rating.trim().eq_ignore_ascii_case(RESTRICTED_RATING))
}
