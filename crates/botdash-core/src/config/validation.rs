use crate::config::types::DashConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// The base URL must be an absolute http(s) URL and every interval must be
/// non-zero.
pub fn validate_config(config: &DashConfig) -> Result<(), ConfigError> {
    validate_base_url(config.endpoint.base_url())?;

    if config.poller.interval_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "poller.interval_ms must be greater than 0".to_string(),
        });
    }

    if config.keepalive.interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "keepalive.interval_secs must be greater than 0".to_string(),
        });
    }

    if config.keepalive.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "keepalive.timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

/// Check that `url` is an absolute http or https URL.
pub fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            message: format!("unsupported scheme '{}', expected http or https", other),
        }),
    }
}
