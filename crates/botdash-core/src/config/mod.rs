//! # Configuration System
//!
//! Hierarchical TOML configuration system for botdash.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.botdash/config.toml`
//! 3. **Project config** - `./.botdash/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.botdash/config.toml
//! [endpoint]
//! base_url = "http://bot.internal:5000"
//!
//! [poller]
//! overlap = "skip"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use botdash_core::config::DashConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashConfig::load_hierarchy()?;
//!     println!("polling {}", config.status_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL_MS, HEALTH_PATH, PING_PATH, STATUS_PATH,
};
pub use types::{DashConfig, EndpointConfig, KeepAliveConfig, OverlapPolicy, PollerConfig};
pub use validation::{validate_base_url, validate_config};

impl DashConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Full URL of the status document.
    pub fn status_url(&self) -> String {
        join_url(self.endpoint.base_url(), STATUS_PATH)
    }
}

/// Append an absolute path to the base URL's path without doubling the slash.
///
/// Any query or fragment on the base is dropped. A base that does not parse
/// is joined as plain text and left for the HTTP client to reject.
pub fn join_url(base: &str, path: &str) -> String {
    match reqwest::Url::parse(base) {
        Ok(mut url) => {
            let joined = format!("{}{}", url.path().trim_end_matches('/'), path);
            url.set_path(&joined);
            url.set_query(None);
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => format!("{}{}", base.trim_end_matches('/'), path),
    }
}
