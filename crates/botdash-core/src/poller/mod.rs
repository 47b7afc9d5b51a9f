//! Periodic status polling.
//!
//! A [`StatusPoller`] owns one ticker task while it is [`PollerState::Active`].
//! Every tick spawns a poll cycle (see [`handler::poll_cycle`]) which fetches
//! a snapshot and renders it into the shared document. Hiding the view stops
//! the ticker; showing it again fetches immediately and re-arms the ticker.

pub mod handler;
pub mod types;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::config::PollerConfig;
use crate::document::Document;
use crate::errors::ConfigError;
use crate::events;
use crate::source::StatusSource;

pub use crate::config::OverlapPolicy;
pub use types::{PollOutcome, PollReport, PollerState, Visibility};

/// Reports buffered per subscriber before it starts lagging.
const REPORT_CHANNEL_CAPACITY: usize = 16;

/// State shared between the poller handle and its spawned tasks.
struct Shared<S: ?Sized, D> {
    source: Arc<S>,
    document: Arc<Mutex<D>>,
    reports: broadcast::Sender<PollReport>,
    in_flight: AtomicUsize,
    loaded: AtomicBool,
}

impl<S, D> Shared<S, D>
where
    S: StatusSource + ?Sized,
    D: Document,
{
    async fn run_cycle(&self) -> PollOutcome {
        let outcome = handler::poll_cycle(&*self.source, &*self.document).await;

        if !self.loaded.swap(true, Ordering::SeqCst) {
            events::log_dashboard_loaded();
        }

        // No subscribers is fine
        let _ = self.reports.send(PollReport::now(outcome.clone()));
        outcome
    }
}

pub struct StatusPoller<S, D>
where
    S: StatusSource + ?Sized + 'static,
    D: Document + 'static,
{
    shared: Arc<Shared<S, D>>,
    interval: Duration,
    overlap: OverlapPolicy,
    state: PollerState,
    ticker: Option<JoinHandle<()>>,
    started_once: bool,
}

impl<S, D> StatusPoller<S, D>
where
    S: StatusSource + ?Sized + 'static,
    D: Document + 'static,
{
    /// Create a paused poller. Nothing is fetched until [`start`](Self::start).
    ///
    /// Fails with [`ConfigError::InvalidConfiguration`] when the interval is
    /// zero, since the ticker cannot be armed with it.
    pub fn new(
        source: Arc<S>,
        document: D,
        config: &PollerConfig,
    ) -> Result<Self, ConfigError> {
        let interval = config.interval();
        if interval.is_zero() {
            return Err(ConfigError::InvalidConfiguration {
                message: "poller interval must be greater than zero".to_string(),
            });
        }
        events::log_dashboard_init(&source.endpoint(), interval.as_millis() as u64);

        let (reports, _) = broadcast::channel(REPORT_CHANNEL_CAPACITY);
        Ok(Self {
            shared: Arc::new(Shared {
                source,
                document: Arc::new(Mutex::new(document)),
                reports,
                in_flight: AtomicUsize::new(0),
                loaded: AtomicBool::new(false),
            }),
            interval,
            overlap: config.overlap(),
            state: PollerState::Paused,
            ticker: None,
            started_once: false,
        })
    }

    /// Create a poller and start it right away. Must be called inside a
    /// tokio runtime.
    pub fn spawn(
        source: Arc<S>,
        document: D,
        config: &PollerConfig,
    ) -> Result<Self, ConfigError> {
        let mut poller = Self::new(source, document, config)?;
        poller.start();
        Ok(poller)
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The document the poller renders into.
    pub fn document(&self) -> Arc<Mutex<D>> {
        Arc::clone(&self.shared.document)
    }

    /// Number of poll cycles currently running.
    pub fn in_flight(&self) -> usize {
        self.shared.in_flight.load(Ordering::SeqCst)
    }

    /// Receive a [`PollReport`] after every completed cycle.
    pub fn subscribe(&self) -> broadcast::Receiver<PollReport> {
        self.shared.reports.subscribe()
    }

    /// Enter [`PollerState::Active`]: poll once now, then every interval.
    ///
    /// No-op when already active.
    pub fn start(&mut self) {
        if self.state == PollerState::Active {
            debug!(event = "core.poller.start_ignored", reason = "already_active");
            return;
        }

        if self.started_once {
            info!(event = "core.poller.resumed");
        } else {
            info!(
                event = "core.poller.started",
                interval_ms = self.interval.as_millis() as u64,
                overlap = ?self.overlap
            );
        }

        self.ticker = Some(tokio::spawn(run_ticker(
            Arc::clone(&self.shared),
            self.interval,
            self.overlap,
        )));
        self.state = PollerState::Active;
        self.started_once = true;
    }

    /// Enter [`PollerState::Paused`]: cancel the pending tick.
    ///
    /// Cycles already running are left to finish and render. No-op when
    /// already paused.
    pub fn stop(&mut self) {
        if self.state == PollerState::Paused {
            return;
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        self.state = PollerState::Paused;
        info!(event = "core.poller.paused", in_flight = self.in_flight());
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        debug!(event = "core.poller.visibility_changed", visibility = ?visibility);
        match visibility {
            Visibility::Visible => self.start(),
            Visibility::Hidden => self.stop(),
        }
    }

    /// Run one poll cycle on the caller's task, outside the ticker.
    ///
    /// The outcome is returned and also published to subscribers.
    pub async fn poll_once(&self) -> PollOutcome {
        self.shared.in_flight.fetch_add(1, Ordering::SeqCst);
        let outcome = self.shared.run_cycle().await;
        self.shared.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }

    /// Stop polling for good. The hosting view is going away.
    pub fn shutdown(&mut self) {
        self.stop();
        events::log_dashboard_closing();
    }
}

impl<S, D> Drop for StatusPoller<S, D>
where
    S: StatusSource + ?Sized + 'static,
    D: Document + 'static,
{
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

async fn run_ticker<S, D>(shared: Arc<Shared<S, D>>, period: Duration, overlap: OverlapPolicy)
where
    S: StatusSource + ?Sized + 'static,
    D: Document + 'static,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // The first tick completes immediately
        ticker.tick().await;

        let claimed = match overlap {
            OverlapPolicy::Allow => {
                shared.in_flight.fetch_add(1, Ordering::SeqCst);
                true
            }
            OverlapPolicy::Skip => shared
                .in_flight
                .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok(),
        };

        if !claimed {
            debug!(
                event = "core.poller.tick_skipped",
                in_flight = shared.in_flight.load(Ordering::SeqCst)
            );
            continue;
        }

        debug!(event = "core.poller.tick");
        let shared = Arc::clone(&shared);
        tokio::spawn(async move {
            shared.run_cycle().await;
            shared.in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }
}
