//! Stats Module
//!
//! The admin statistics endpoint: collection totals, activity over the last
//! seven days, and a per-day timeseries, all derived from record creation
//! timestamps in a single document load.

/// HTTP handlers
pub mod handlers;

pub use handlers::admin_stats;
