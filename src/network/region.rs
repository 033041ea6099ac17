//! Region availability

use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Set of country codes where content is blocked
#[derive(Debug, Clone, Default)]
pub struct RegionPolicy {
    blocked: Vec<String>,
}

impl RegionPolicy {
    pub fn new<I, S>(blocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked: blocked.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.blocked_regions.iter().cloned())
    }

    /// Exact, case-sensitive match against the blocked list
    pub fn is_blocked(&self, country: &str) -> bool {
        self.blocked.iter().any(|region| region == country)
    }

    /// Check whether content can be streamed to `country`
    pub fn access_content(&self, country: &str) -> Result<()> {
        if self.is_blocked(country) {
            return Err(Error::RegionBlocked {
                country: country.to_string(),
            });
        }

        tracing::info!(country = %country, "Content streamed successfully");
        Ok(())
    }
}
