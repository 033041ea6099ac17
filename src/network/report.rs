//! Error reporting over HTTP
//!
//! Posts a form with a single `error` field. There is no retry; callers
//! decide what to do with a failed report.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::AppConfig;
use crate::error::Result;

/// Request timeout for a single report
const REPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends error messages to a collection endpoint
#[derive(Debug, Clone)]
pub struct ErrorReporter {
    client: Client,
    url: String,
}

impl ErrorReporter {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REPORT_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a reporter for the configured endpoint
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.error_report_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post `message` and return the response status
    pub async fn report(&self, message: &str) -> Result<StatusCode> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("error", message)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(url = %self.url, status = %status, "Error report sent");
        Ok(status)
    }
}
