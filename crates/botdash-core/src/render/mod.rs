pub mod operations;
pub mod templates;

// Re-export commonly used functions
pub use operations::{render_error, render_last_deployment, render_status, update_element};
