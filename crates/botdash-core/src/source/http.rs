//! reqwest-backed access to the bot's web server.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{
    DashConfig, HEALTH_PATH, PING_PATH, STATUS_PATH, join_url, validate_base_url,
};
use crate::errors::ConfigError;
use crate::snapshot::{HealthReport, StatusSnapshot};
use crate::source::StatusSource;
use crate::source::errors::FetchError;

/// Fetches status documents over HTTP.
///
/// Requests carry no body, no query and no auth headers. The status fetch
/// has no timeout beyond the transport default.
#[derive(Clone, Debug)]
pub struct HttpStatusSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStatusSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FetchError::Transport {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Self::with_client(client, base_url)
    }

    pub fn from_config(config: &DashConfig) -> Result<Self, FetchError> {
        Self::new(config.endpoint.base_url())
    }

    /// Use a preconfigured client (proxies, default headers, ...).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        validate_base_url(&base_url).map_err(|e| FetchError::InvalidUrl {
            url: base_url.clone(),
            message: match e {
                ConfigError::InvalidBaseUrl { message, .. } => message,
                other => other.to_string(),
            },
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the body of a successful response.
    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let url = join_url(&self.base_url, path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!(
            event = "core.source.response_received",
            url = %url,
            status = status.as_u16()
        );

        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// GET the status path and return only the response status code.
    pub async fn status_code(&self, timeout: Duration) -> Result<u16, FetchError> {
        let url = join_url(&self.base_url, STATUS_PATH);
        let response = self.client.get(&url).timeout(timeout).send().await?;
        Ok(response.status().as_u16())
    }

    pub async fn health(&self) -> Result<HealthReport, FetchError> {
        let body = self.get_text(HEALTH_PATH).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::MalformedBody {
            message: e.to_string(),
        })
    }

    /// GET the liveness check. The server answers a plain `pong`.
    pub async fn ping(&self) -> Result<String, FetchError> {
        let body = self.get_text(PING_PATH).await?;
        let body = body.trim().to_string();
        if body != "pong" {
            return Err(FetchError::MalformedBody {
                message: format!("expected 'pong', got '{}'", body),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self) -> Result<StatusSnapshot, FetchError> {
        let body = self.get_text(STATUS_PATH).await?;
        StatusSnapshot::from_json(&body).map_err(|e| FetchError::MalformedBody {
            message: e.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        join_url(&self.base_url, STATUS_PATH)
    }
}
