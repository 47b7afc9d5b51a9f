use clap::ArgMatches;
use tokio::runtime::Runtime;
use tracing::{error, warn};

use botdash_core::config::DashConfig;
use botdash_core::{DashError, HttpStatusSource, events};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> DashConfig {
    match DashConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.botdash/config.toml and ./.botdash/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            DashConfig::default()
        }
    }
}

/// Config from the file hierarchy with the global `--url` flag applied on top.
pub fn resolve_config(matches: &ArgMatches) -> DashConfig {
    let mut config = load_config_with_warning();

    // Apply CLI override only if provided
    if let Some(url) = matches.get_one::<String>("url") {
        config.endpoint.base_url = Some(url.clone());
    }

    config
}

pub fn build_source(config: &DashConfig) -> Result<HttpStatusSource, Box<dyn std::error::Error>> {
    HttpStatusSource::from_config(config).map_err(|e| {
        eprintln!("❌ {}", e);
        events::log_failure("cli.source.build_failed", &e);
        e.into()
    })
}

pub fn runtime() -> Result<Runtime, Box<dyn std::error::Error>> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            error!(event = "cli.runtime.build_failed", error = %e);
            e.into()
        })
}
