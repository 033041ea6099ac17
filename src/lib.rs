//! # streampy
//!
//! Building blocks for a video streaming platform.
//!
//! - [`history`]: recently watched buffer and comments grouped by video
//! - [`media`]: movies and series with stream keys and playback
//! - [`catalog`]: rating lookup, playlist runtime, kids profile filter
//! - [`data`]: SQLite plans/users and simulated encoding/subtitle workers
//! - [`network`]: HTTP error reports, CSV usernames, cache dir, region checks
//! - [`timing`]: call timing with slow-call warnings
//!
//! # Example
//!
//! ```
//! use streampy::history::{CommentStore, RecentlyWatched};
//!
//! let mut recent = RecentlyWatched::new(2)?;
//! recent.add("Movie1")?;
//! recent.add("Movie2")?;
//! recent.add("Movie3")?;
//! assert_eq!(recent.history(), vec!["Movie2", "Movie3"]);
//!
//! let mut comments = CommentStore::new();
//! comments.add("VID101", "Great!")?;
//! assert_eq!(comments.get("VID101"), vec!["Great!"]);
//! assert!(comments.get("VID303").is_empty());
//! # Ok::<(), streampy::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod history;
pub mod logging;
pub mod media;
pub mod network;
pub mod timing;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use history::{CommentStore, GroupedLogStore, RecencyBuffer, RecentlyWatched};
pub use media::{Content, PlayOutcome};
pub use timing::ExecutionTimer;
