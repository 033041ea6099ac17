//! Data layer and background jobs
//!
//! This module provides:
//! - SQLite-backed subscription plans and users
//! - Simulated video encoding and subtitle download workers

pub mod database;
pub mod workers;

pub use database::{DatabaseManager, SubscriptionPlan, User, PREMIUM_PLAN};
pub use workers::{StreamEvent, SubtitleDownloader, VideoEncoder};
