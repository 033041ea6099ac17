//! Application configuration
//!
//! Built once at process start and passed by reference to every component
//! that touches the filesystem, the database, or the network.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Default endpoint receiving error reports
pub const DEFAULT_ERROR_REPORT_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Application configuration options
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding log files
    pub log_dir: PathBuf,

    /// Log file name inside `log_dir`
    pub log_file: String,

    /// SQLite connection URL
    pub database_url: String,

    /// Maximum pooled database connections
    pub database_max_connections: u32,

    /// Number of titles kept in watch history
    pub history_capacity: usize,

    /// Calls slower than this are logged at WARN
    pub slow_call_threshold: Duration,

    /// Simulated encoding time per file
    pub encode_delay: Duration,

    /// Simulated subtitle download time
    pub subtitle_delay: Duration,

    /// Simulated buffering before playback starts
    pub buffering_delay: Duration,

    /// Cache directory
    pub cache_dir: PathBuf,

    /// ZIP file receiving archived logs
    pub logs_archive: PathBuf,

    /// CSV file with a header row and usernames in the first column
    pub users_csv: PathBuf,

    /// Maximum usernames listed from `users_csv`
    pub username_limit: usize,

    /// Endpoint receiving error reports
    pub error_report_url: String,

    /// Country codes where content is unavailable
    pub blocked_regions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file: "server.log".to_string(),
            database_url: "sqlite://streampy.db".to_string(),
            database_max_connections: 1,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            slow_call_threshold: Duration::from_secs(1),
            encode_delay: Duration::from_secs(2),
            subtitle_delay: Duration::from_millis(1500),
            buffering_delay: Duration::from_secs(1),
            cache_dir: PathBuf::from("cache"),
            logs_archive: PathBuf::from("logs_archive.zip"),
            users_csv: PathBuf::from("data/users.csv"),
            username_limit: 5,
            error_report_url: DEFAULT_ERROR_REPORT_URL.to_string(),
            blocked_regions: vec!["US".to_string(), "UK".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from `STREAMPY_*` environment variables
    ///
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env_var("STREAMPY_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(file) = env_var("STREAMPY_LOG_FILE") {
            config.log_file = file;
        }
        if let Some(url) = env_var("STREAMPY_DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(max) = env_var("STREAMPY_DB_MAX_CONNECTIONS").and_then(|v| v.parse().ok()) {
            config.database_max_connections = max;
        }
        if let Some(capacity) = env_var("STREAMPY_HISTORY_CAPACITY").and_then(|v| v.parse().ok())
        {
            config.history_capacity = capacity;
        }
        if let Some(ms) = env_var("STREAMPY_SLOW_CALL_MS").and_then(|v| v.parse().ok()) {
            config.slow_call_threshold = Duration::from_millis(ms);
        }
        if let Some(dir) = env_var("STREAMPY_CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Some(path) = env_var("STREAMPY_LOGS_ARCHIVE") {
            config.logs_archive = PathBuf::from(path);
        }
        if let Some(path) = env_var("STREAMPY_USERS_CSV") {
            config.users_csv = PathBuf::from(path);
        }
        if let Some(url) = env_var("STREAMPY_ERROR_REPORT_URL") {
            config.error_report_url = url;
        }
        if let Some(regions) = env_var("STREAMPY_BLOCKED_REGIONS") {
            config.blocked_regions = parse_regions(&regions);
        }

        config
    }

    /// Full path of the log file
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    /// Set the log directory
    pub fn log_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the watch history capacity
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the slow-call threshold
    pub fn slow_call_threshold(mut self, threshold: Duration) -> Self {
        self.slow_call_threshold = threshold;
        self
    }

    /// Set all simulated worker delays at once
    pub fn worker_delays(mut self, encode: Duration, subtitles: Duration, buffering: Duration) -> Self {
        self.encode_delay = encode;
        self.subtitle_delay = subtitles;
        self.buffering_delay = buffering;
        self
    }

    /// Set the cache directory
    pub fn cache_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cache_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the log archive path
    pub fn logs_archive(mut self, path: impl AsRef<Path>) -> Self {
        self.logs_archive = path.as_ref().to_path_buf();
        self
    }

    /// Set the users CSV path
    pub fn users_csv(mut self, path: impl AsRef<Path>) -> Self {
        self.users_csv = path.as_ref().to_path_buf();
        self
    }

    /// Set the error report endpoint
    pub fn error_report_url(mut self, url: impl Into<String>) -> Self {
        self.error_report_url = url.into();
        self
    }

    /// Replace the blocked region list
    pub fn blocked_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_regions = regions.into_iter().map(Into::into).collect();
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_regions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_path(), PathBuf::from("logs").join("server.log"));
        assert_eq!(config.database_url, "sqlite://streampy.db");
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.slow_call_threshold, Duration::from_secs(1));
        assert_eq!(config.encode_delay, Duration::from_secs(2));
        assert_eq!(config.subtitle_delay, Duration::from_millis(1500));
        assert_eq!(config.buffering_delay, Duration::from_secs(1));
        assert_eq!(config.username_limit, 5);
        assert_eq!(config.logs_archive, PathBuf::from("logs_archive.zip"));
        assert_eq!(config.blocked_regions, vec!["US", "UK"]);
    }

    #[test]
    fn test_builder_chaining() {
        let config = AppConfig::default()
            .log_dir("/tmp/streampy-logs")
            .database_url("sqlite::memory:")
            .history_capacity(10)
            .slow_call_threshold(Duration::from_millis(250))
            .cache_dir("/tmp/streampy-cache")
            .logs_archive("/tmp/streampy-logs.zip")
            .users_csv("users.csv")
            .error_report_url("http://localhost:9000/report")
            .blocked_regions(["FR"]);

        assert_eq!(config.log_dir, PathBuf::from("/tmp/streampy-logs"));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.slow_call_threshold, Duration::from_millis(250));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/streampy-cache"));
        assert_eq!(config.logs_archive, PathBuf::from("/tmp/streampy-logs.zip"));
        assert_eq!(config.users_csv, PathBuf::from("users.csv"));
        assert_eq!(config.error_report_url, "http://localhost:9000/report");
        assert_eq!(config.blocked_regions, vec!["FR"]);
    }

    #[test]
    fn test_builder_worker_delays() {
        let config = AppConfig::default().worker_delays(
            Duration::from_millis(1),
            Duration::from_millis(2),
            Duration::from_millis(3),
        );

        assert_eq!(config.encode_delay, Duration::from_millis(1));
        assert_eq!(config.subtitle_delay, Duration::from_millis(2));
        assert_eq!(config.buffering_delay, Duration::from_millis(3));
    }

    #[test]
    fn test_parse_regions() {
        assert_eq!(parse_regions("US, UK ,,DE"), vec!["US", "UK", "DE"]);
        assert!(parse_regions(" , ").is_empty());
    }
}
