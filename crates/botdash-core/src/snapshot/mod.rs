pub mod timestamp;
pub mod types;

// Re-export commonly used types
pub use timestamp::{INVALID_DATE, display_timestamp, format_datetime, parse_timestamp};
pub use types::{HealthReport, LastDeployment, StatusSnapshot};
