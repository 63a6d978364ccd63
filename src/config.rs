use crate::errors::{ConfigError, TrickplayResult};
use serde::Deserialize;
use std::time::Duration;

/// Client-side trickplay settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrickplayConfig {
    /// When false nothing is fetched and no thumbnails are shown.
    pub enabled: bool,
    /// Width to request; `None` picks the largest width the server offers.
    pub preferred_width: Option<u32>,
    pub http_timeout_secs: u64,
    /// Sent as `X-Emby-Token` on every request.
    pub access_token: Option<String>,
}

impl Default for TrickplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            preferred_width: None,
            http_timeout_secs: 30,
            access_token: None,
        }
    }
}

impl TrickplayConfig {
    /// Parse and validate a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> TrickplayResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::new(format!("Invalid trickplay config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::new("http_timeout_secs must be greater than 0"));
        }
        if self.preferred_width == Some(0) {
            return Err(ConfigError::new("preferred_width must be greater than 0"));
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
