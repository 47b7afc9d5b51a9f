//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.botdash/config.toml` (global user preferences)
//! 3. **Project config** - `./.botdash/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{DashConfig, EndpointConfig, KeepAliveConfig, PollerConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".botdash";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.botdash/config.toml`)
/// 3. Project config (`./.botdash/config.toml`)
///
/// # Errors
///
/// Returns an error if a present file fails to parse or the merged config
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DashConfig, ConfigError> {
    let user_dir = dirs::home_dir();
    let project_dir = std::env::current_dir()?;
    load_hierarchy_from(user_dir.as_deref(), &project_dir)
}

/// Same as [`load_hierarchy`] with explicit user and project directories.
pub fn load_hierarchy_from(
    user_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<DashConfig, ConfigError> {
    let mut config = DashConfig::default();

    let mut sources: Vec<PathBuf> = Vec::new();
    if let Some(home) = user_dir {
        sources.push(config_path_in(home));
    }
    sources.push(config_path_in(project_dir));

    for path in sources {
        match load_config_file(&path) {
            Ok(file_config) => config = merge_configs(config, file_config),
            Err(ConfigError::ConfigNotFound { .. }) => {
                debug!(
                    event = "core.config.file_missing",
                    path = %path.display()
                );
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<DashConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: DashConfig, override_config: DashConfig) -> DashConfig {
    DashConfig {
        endpoint: EndpointConfig {
            base_url: override_config.endpoint.base_url.or(base.endpoint.base_url),
        },
        poller: PollerConfig {
            interval_ms: override_config
                .poller
                .interval_ms
                .or(base.poller.interval_ms),
            overlap: override_config.poller.overlap.or(base.poller.overlap),
        },
        keepalive: KeepAliveConfig {
            interval_secs: override_config
                .keepalive
                .interval_secs
                .or(base.keepalive.interval_secs),
            timeout_secs: override_config
                .keepalive
                .timeout_secs
                .or(base.keepalive.timeout_secs),
        },
    }
}
