//! Application lifecycle events shared by the CLI and the poller.

use tracing::{error, info, warn};

use crate::errors::DashError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Emitted once when a dashboard is constructed, before the first poll.
pub fn log_dashboard_init(endpoint: &str, interval_ms: u64) {
    info!(
        event = "core.dashboard.init_started",
        endpoint = endpoint,
        interval_ms = interval_ms
    );
}

/// Emitted once the first render has landed in the document.
pub fn log_dashboard_loaded() {
    info!(event = "core.dashboard.loaded");
}

/// Emitted when the hosting view goes away. No other cleanup is tied to it.
pub fn log_dashboard_closing() {
    info!(event = "core.dashboard.closing");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Log a failed operation under `event`. User errors (bad input or config)
/// are warnings; everything else is an error.
pub fn log_failure(event: &str, error: &dyn DashError) {
    if error.is_user_error() {
        warn!(event = event, error = %error, error_code = error.error_code());
    } else {
        error!(event = event, error = %error, error_code = error.error_code());
    }
}
