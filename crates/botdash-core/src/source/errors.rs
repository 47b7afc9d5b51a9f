use crate::errors::DashError;

/// Why a fetch from the bot's web server failed.
///
/// The dashboard renders every variant the same way; the distinction only
/// shows up in logs and CLI output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request failed: {message}")]
    Transport { message: String },

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed response body: {message}")]
    MalformedBody { message: String },
}

impl DashError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "FETCH_INVALID_URL",
            FetchError::Transport { .. } => "FETCH_TRANSPORT_ERROR",
            FetchError::HttpStatus { .. } => "FETCH_HTTP_STATUS",
            FetchError::MalformedBody { .. } => "FETCH_MALFORMED_BODY",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, FetchError::InvalidUrl { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => FetchError::HttpStatus {
                status: status.as_u16(),
            },
            None => FetchError::Transport {
                message: error.to_string(),
            },
        }
    }
}
