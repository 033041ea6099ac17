//! Movie catalog
//!
//! This module provides:
//! - Loosely-typed movie records and the demo catalog
//! - Title/rating lookup, playlist runtime, and kids profile filtering

pub mod movie;
pub mod recommendations;

pub use movie::{sample_movies, MovieRecord, Runtime};
pub use recommendations::{kids_profile_filter, lookup_table, total_duration};
