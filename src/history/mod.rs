//! Viewer history collections
//!
//! This module provides:
//! - A bounded recency buffer for recently watched titles
//! - A grouped store for comments keyed by video ID
//!
//! Both are plain owned values with `&mut self` writers. Callers that share
//! one across tasks wrap it in a lock themselves.

pub mod comments;
pub mod recent;

pub use comments::{CommentStore, GroupedLogStore};
pub use recent::{RecencyBuffer, RecentlyWatched, DEFAULT_HISTORY_CAPACITY};
