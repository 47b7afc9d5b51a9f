//! Where status snapshots come from.
//!
//! [`StatusSource`] is the seam between polling and the network: the poller
//! only ever asks for "the current snapshot", so tests can swap the HTTP
//! implementation for a mock.

pub mod errors;
pub mod http;

use async_trait::async_trait;

use crate::snapshot::StatusSnapshot;

pub use errors::FetchError;
pub use http::HttpStatusSource;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch and parse one status document.
    async fn fetch_status(&self) -> Result<StatusSnapshot, FetchError>;

    /// Human-readable location of the status document, for logs.
    fn endpoint(&self) -> String;
}
