// crates/addrcheck-core/src/config.rs

//! Geocoder client settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

pub const ENV_ENDPOINT: &str = "ADDRCHECK_GEOCODER_URL";
pub const ENV_USER_AGENT: &str = "ADDRCHECK_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "ADDRCHECK_TIMEOUT_SECS";

/// Where and how to reach the geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    /// Search endpoint; receives `q=<address>&format=json`.
    pub endpoint: String,
    /// Fixed client identifier sent as `User-Agent`.
    pub user_agent: String,
    /// Hard deadline for one request. Expiry is reported as a timeout and
    /// never retried.
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("addrcheck/{}", env!("CARGO_PKG_VERSION"))
}

impl GeocoderConfig {
    /// Defaults, overridden by `ADDRCHECK_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key/value lookup. Unparseable or empty
    /// values are ignored with a warning.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            self.endpoint = url.trim().to_string();
        }
        if let Some(agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            self.user_agent = agent.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT_SECS}"),
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
