//! Execution timing
//!
//! Wraps a call, measures it, and logs the outcome:
//! - ERROR with the error when the call fails (the error is passed through)
//! - WARN when the call took longer than the slow threshold
//! - INFO otherwise

use std::fmt::Display;
use std::future::Future;
use std::time::{Duration, Instant};

/// Default slow-call threshold
pub const DEFAULT_SLOW_THRESHOLD: Duration = Duration::from_secs(1);

/// Measures calls and logs their duration
#[derive(Debug, Clone, Copy)]
pub struct ExecutionTimer {
    slow_threshold: Duration,
}

impl ExecutionTimer {
    pub fn new(slow_threshold: Duration) -> Self {
        Self { slow_threshold }
    }

    pub fn slow_threshold(&self) -> Duration {
        self.slow_threshold
    }

    /// Whether `elapsed` is over the slow threshold
    pub fn is_slow(&self, elapsed: Duration) -> bool {
        elapsed > self.slow_threshold
    }

    /// Run a fallible closure and log how long it took
    pub fn run<T, E, F>(&self, name: &str, f: F) -> Result<T, E>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        let start = Instant::now();
        let result = f();
        self.record(name, start.elapsed(), &result);
        result
    }

    /// Await a fallible future and log how long it took
    pub async fn run_async<T, E, Fut>(&self, name: &str, fut: Fut) -> Result<T, E>
    where
        E: Display,
        Fut: Future<Output = Result<T, E>>,
    {
        let start = Instant::now();
        let result = fut.await;
        self.record(name, start.elapsed(), &result);
        result
    }

    fn record<T, E: Display>(&self, name: &str, elapsed: Duration, result: &Result<T, E>) {
        if let Err(e) = result {
            tracing::error!(function = name, error = %e, "{} failed: {}", name, e);
            return;
        }

        let secs = elapsed.as_secs_f64();
        let elapsed_ms = whole_millis(elapsed);
        if self.is_slow(elapsed) {
            tracing::warn!(
                function = name,
                elapsed_ms = elapsed_ms,
                "{} took {:.2} seconds",
                name,
                secs
            );
        } else {
            tracing::info!(
                function = name,
                elapsed_ms = elapsed_ms,
                "{} took {:.2} seconds",
                name,
                secs
            );
        }
    }
}

/// Milliseconds in `elapsed`, clamped to `u64::MAX`
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

impl Default for ExecutionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SLOW_THRESHOLD)
    }
}
