//! Structured metrics snapshot (JSON reporting view).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Admin login outcome tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempts {
    pub success: u64,
    pub failure: u64,
}

/// Per-blog view count plus the most recently supplied title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogView {
    pub count: u64,
    pub title: String,
}

/// Per-project view count plus the most recently supplied name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub count: u64,
    pub name: String,
}

/// Point-in-time view of the aggregator.
///
/// Maps are ordered by key so serialized output is stable across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub uptime_seconds: u64,
    pub http_requests_total: u64,
    pub admin_login_attempts: LoginAttempts,
    pub page_views: BTreeMap<String, u64>,
    pub blog_views: BTreeMap<String, BlogView>,
    pub project_views: BTreeMap<String, ProjectView>,
    /// Mean of the response-time window, rounded; 0 when the window is empty.
    pub average_response_time_ms: i64,
    /// Reserved gauge, always 0.
    pub active_users: u64,
    /// ISO-8601 UTC instant the snapshot was taken.
    pub timestamp: String,
}
