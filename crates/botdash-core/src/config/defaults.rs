//! Default values and accessors for configuration types.
//!
//! Config fields are optional so that merging can tell "unset" from
//! "explicitly set". The accessors here resolve unset fields to defaults.

use std::time::Duration;

use crate::config::types::{
    DashConfig, EndpointConfig, KeepAliveConfig, OverlapPolicy, PollerConfig,
};

/// Default base URL of the bot's web server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Fixed path of the status document, relative to the base URL.
pub const STATUS_PATH: &str = "/api/status";

/// Path of the health report, relative to the base URL.
pub const HEALTH_PATH: &str = "/api/health";

/// Path of the plain-text liveness check, relative to the base URL.
pub const PING_PATH: &str = "/ping";

/// Poll every 5 seconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

pub const DEFAULT_KEEPALIVE_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_KEEPALIVE_TIMEOUT_SECS: u64 = 10;

impl EndpointConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

impl PollerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }

    pub fn overlap(&self) -> OverlapPolicy {
        self.overlap.unwrap_or_default()
    }
}

impl KeepAliveConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.unwrap_or(DEFAULT_KEEPALIVE_INTERVAL_SECS))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_KEEPALIVE_TIMEOUT_SECS))
    }
}

impl DashConfig {
    /// Config pointing at `base_url` with every other setting at its default.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            endpoint: EndpointConfig {
                base_url: Some(base_url.into()),
            },
            ..Self::default()
        }
    }
}
