use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SOURCE_BASE_URL, DEFAULT_SOURCE_TIMEOUT_SECS,
    MAX_SOURCE_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Third-party employee API the sync operation reads from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL; the sync issues `GET <base_url>/employees`
    pub base_url: String,
    /// Request timeout for the outbound client (0 = none)
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_SOURCE_BASE_URL),
            timeout_secs: DEFAULT_SOURCE_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::upstream(format!(
                "source.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs > MAX_SOURCE_TIMEOUT_SECS {
            return Err(ConfigError::upstream(format!(
                "source.timeout_secs must be <= {}, got {}",
                MAX_SOURCE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
