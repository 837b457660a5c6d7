//! Client configuration.

use crate::protocol::endpoints::API_URL;
use std::time::Duration;

/// Configuration for the HTTP side of the Bold Smart Lock client.
#[derive(Debug, Clone)]
pub struct BoldConfig {
    /// Application name reported in the User-Agent (e.g., "home-assistant/2024.6")
    pub app_name: String,

    /// Base URL of the Bold API, without a trailing slash.
    pub api_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for BoldConfig {
    fn default() -> Self {
        Self {
            app_name: "bold-smart-lock".to_string(),
            api_url: API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl BoldConfig {
    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), crate::BoldError> {
        if self.app_name.is_empty() {
            return Err(crate::BoldError::Config(
                "app_name cannot be empty".to_string(),
            ));
        }
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(crate::BoldError::Config(format!(
                "api_url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(crate::BoldError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
