//! Network and filesystem operations
//!
//! This module provides:
//! - HTTP error reporting
//! - CSV username listing, cache directory setup, and log archiving
//! - Region availability checks

pub mod files;
pub mod region;
pub mod report;

pub use files::{archive_logs, ensure_cache_dir, read_usernames};
pub use region::RegionPolicy;
pub use report::ErrorReporter;
