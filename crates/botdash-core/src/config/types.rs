//! Configuration type definitions for botdash.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [endpoint]
//! base_url = "http://localhost:5000"
//!
//! [poller]
//! interval_ms = 5000
//! overlap = "skip"
//!
//! [keepalive]
//! interval_secs = 60
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.botdash/config.toml`
/// 2. Project config: `./.botdash/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashConfig {
    /// Where the bot's web server lives
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Status polling behaviour
    #[serde(default)]
    pub poller: PollerConfig,

    /// Keep-alive pinger settings
    #[serde(default)]
    pub keepalive: KeepAliveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EndpointConfig {
    /// Base URL of the bot's web server. The status path is appended to it.
    /// Default: `http://localhost:5000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// What to do when a tick fires while the previous fetch is still running.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Start another fetch anyway; whichever completes last wins the render.
    #[default]
    Allow,
    /// Skip the tick until the in-flight fetch has completed.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PollerConfig {
    /// Milliseconds between polls. Default: 5000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<OverlapPolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KeepAliveConfig {
    /// Seconds between keep-alive pings. Default: 60.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,

    /// Per-request timeout for keep-alive pings. Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}
