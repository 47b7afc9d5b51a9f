//! botdash-core: Core library for the deployment bot status dashboard
//!
//! This library polls the bot's status endpoint and renders each snapshot
//! into a fixed set of addressable page elements. It is used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`poller`] - Periodic status polling with pause/resume on visibility
//! - [`render`] - Render a snapshot (or the error state) into a document
//! - [`source`] - Fetch snapshots from the status endpoint
//! - [`keepalive`] - Background pinger keeping the bot's web server awake
//! - [`config`] - Configuration management

pub mod config;
pub mod document;
pub mod errors;
pub mod escape;
pub mod events;
pub mod keepalive;
pub mod logging;
pub mod poller;
pub mod render;
pub mod snapshot;
pub mod source;

// Re-export commonly used types at crate root for convenience
pub use config::DashConfig;
pub use document::{Document, ElementId, PageDocument};
pub use errors::{ConfigError, DashError};
pub use keepalive::{KeepAlive, PingOutcome};
pub use poller::{OverlapPolicy, PollOutcome, PollReport, PollerState, StatusPoller, Visibility};
pub use snapshot::{HealthReport, LastDeployment, StatusSnapshot};
pub use source::{FetchError, HttpStatusSource, StatusSource};

// Re-export handler modules as the primary API
pub use poller::handler as poller_ops;
pub use render::operations as render_ops;

// Re-export logging initialization
pub use logging::init_logging;
