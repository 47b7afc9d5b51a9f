use chrono::{DateTime, Local};

use crate::source::FetchError;

/// Whether the poller's timer is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Active,
    Paused,
}

/// Whether the view hosting the dashboard is in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Result of one fetch-and-render cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// A snapshot was fetched and rendered.
    Rendered { is_ready: bool },
    /// The fetch failed and the error state was rendered.
    Failed(FetchError),
}

impl PollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PollOutcome::Rendered { .. })
    }
}

/// Published to subscribers after every completed cycle.
#[derive(Debug, Clone)]
pub struct PollReport {
    pub outcome: PollOutcome,
    pub completed_at: DateTime<Local>,
}

impl PollReport {
    pub fn now(outcome: PollOutcome) -> Self {
        Self {
            outcome,
            completed_at: Local::now(),
        }
    }
}
