//! Media playback
//!
//! This module provides:
//! - Movie and series content with stream keys
//! - Variant-specific playback outcomes

pub mod content;

pub use content::{Content, ContentInfo, PlayOutcome};
