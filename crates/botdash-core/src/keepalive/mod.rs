//! Keep-alive pinger.
//!
//! Hosting platforms put idle web servers to sleep. [`KeepAlive`] hits the
//! status endpoint on a fixed interval so the bot's server keeps answering.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::KeepAliveConfig;
use crate::errors::DashError;
use crate::source::{FetchError, HttpStatusSource};

/// Result of a single keep-alive ping.
#[derive(Debug, Clone, PartialEq)]
pub enum PingOutcome {
    /// The server answered 200.
    Alive,
    /// The server answered, but not with 200.
    UnexpectedStatus(u16),
    Failed(FetchError),
}

pub struct KeepAlive {
    source: HttpStatusSource,
    interval: Duration,
    timeout: Duration,
}

impl KeepAlive {
    pub fn new(source: HttpStatusSource, config: &KeepAliveConfig) -> Self {
        Self {
            source,
            interval: config.interval(),
            timeout: config.timeout(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ping once and log the result. Never fails.
    pub async fn ping(&self) -> PingOutcome {
        match self.source.status_code(self.timeout).await {
            Ok(200) => {
                info!(
                    event = "core.keepalive.ping_succeeded",
                    base_url = self.source.base_url()
                );
                PingOutcome::Alive
            }
            Ok(status) => {
                warn!(
                    event = "core.keepalive.ping_unexpected_status",
                    base_url = self.source.base_url(),
                    status = status
                );
                PingOutcome::UnexpectedStatus(status)
            }
            Err(e) => {
                error!(
                    event = "core.keepalive.ping_failed",
                    base_url = self.source.base_url(),
                    error = %e,
                    error_code = e.error_code()
                );
                PingOutcome::Failed(e)
            }
        }
    }

    /// Ping immediately, then once per interval, until `shutdown` fires.
    ///
    /// Returns the number of pings that completed.
    pub async fn run(&self, shutdown: CancellationToken) -> usize {
        info!(
            event = "core.keepalive.started",
            base_url = self.source.base_url(),
            interval_secs = self.interval.as_secs_f64()
        );

        let mut completed = 0;
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = self.ping() => completed += 1,
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(event = "core.keepalive.stopped", pings = completed);
        completed
    }
}
