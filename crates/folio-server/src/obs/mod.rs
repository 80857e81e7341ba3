//! In-process portfolio analytics.
//!
//! Counters, view maps and the response-time window live in memory only and
//! are rendered by the reporting routes as JSON or Prometheus text.

pub mod metrics;

pub use metrics::{PortfolioMetrics, RESPONSE_WINDOW_MAX};
