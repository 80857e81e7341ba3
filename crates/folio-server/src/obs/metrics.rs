//! Portfolio metrics aggregator.
//!
//! Counters are atomics and the per-id view maps are `DashMap`s, so recording
//! never needs a global lock. The response-time window is the only compound
//! structure: append and evict happen under one mutex so its length never
//! exceeds capacity, even transiently.
//!
//! One instance is built at startup and shared through `AppState`; there is no
//! reset, the state lives for the lifetime of the process.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use dashmap::DashMap;

use folio_core::protocol::{BlogView, LoginAttempts, MetricsSnapshot, ProjectView};

/// Maximum number of response-time samples kept for the rolling mean.
pub const RESPONSE_WINDOW_MAX: usize = 1000;

struct LabeledCount {
    count: u64,
    label: String,
}

pub struct PortfolioMetrics {
    started: Instant,
    http_requests_total: AtomicU64,
    login_success: AtomicU64,
    login_failure: AtomicU64,
    page_views: DashMap<String, AtomicU64>,
    blog_views: DashMap<String, LabeledCount>,
    project_views: DashMap<String, LabeledCount>,
    response_times: Mutex<VecDeque<f64>>,
    window: usize,
    active_users: AtomicU64,
}

impl Default for PortfolioMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioMetrics {
    pub fn new() -> Self {
        Self::with_window(RESPONSE_WINDOW_MAX)
    }

    /// Build with a smaller response-time window. Clamped to `1..=RESPONSE_WINDOW_MAX`.
    pub fn with_window(window: usize) -> Self {
        let window = window.clamp(1, RESPONSE_WINDOW_MAX);
        Self {
            started: Instant::now(),
            http_requests_total: AtomicU64::new(0),
            login_success: AtomicU64::new(0),
            login_failure: AtomicU64::new(0),
            page_views: DashMap::new(),
            blog_views: DashMap::new(),
            project_views: DashMap::new(),
            response_times: Mutex::new(VecDeque::with_capacity(window + 1)),
            window,
            active_users: AtomicU64::new(0),
        }
    }

    /// Count one completed HTTP request. Labels are traced, not broken out.
    pub fn increment_http_requests(&self, method: &str, route: &str, status: u16) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(%method, %route, status, "http request counted");
    }

    pub fn record_login_attempt(&self, success: bool) {
        let counter = if success {
            &self.login_success
        } else {
            &self.login_failure
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_page_view(&self, page: &str) {
        // get() first so repeat views skip the key allocation.
        if let Some(c) = self.page_views.get(page) {
            c.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.page_views
            .entry(page.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Count a blog view; the stored title is always the latest one supplied.
    pub fn record_blog_view(&self, blog_id: &str, title: &str) {
        bump_labeled(&self.blog_views, blog_id, title);
    }

    /// Count a project view; the stored name is always the latest one supplied.
    pub fn record_project_view(&self, project_id: &str, name: &str) {
        bump_labeled(&self.project_views, project_id, name);
    }

    /// Append a sample, evicting the oldest once the window is full.
    pub fn record_response_time(&self, duration_ms: f64) {
        let mut w = self.window_guard();
        w.push_back(duration_ms);
        if w.len() > self.window {
            w.pop_front();
        }
    }

    /// Current number of samples in the response-time window.
    pub fn response_window_len(&self) -> usize {
        self.window_guard().len()
    }

    /// Samples currently in the window, oldest first.
    pub fn response_window(&self) -> Vec<f64> {
        self.window_guard().iter().copied().collect()
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Structured view of every counter. Pure read.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let page_views: BTreeMap<String, u64> = self
            .page_views
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();

        let blog_views: BTreeMap<String, BlogView> = self
            .blog_views
            .iter()
            .map(|r| {
                let v = r.value();
                let view = BlogView {
                    count: v.count,
                    title: v.label.clone(),
                };
                (r.key().clone(), view)
            })
            .collect();

        let project_views: BTreeMap<String, ProjectView> = self
            .project_views
            .iter()
            .map(|r| {
                let v = r.value();
                let view = ProjectView {
                    count: v.count,
                    name: v.label.clone(),
                };
                (r.key().clone(), view)
            })
            .collect();

        MetricsSnapshot {
            uptime_seconds: self.uptime().as_secs(),
            http_requests_total: self.http_requests_total.load(Ordering::Relaxed),
            admin_login_attempts: LoginAttempts {
                success: self.login_success.load(Ordering::Relaxed),
                failure: self.login_failure.load(Ordering::Relaxed),
            },
            page_views,
            blog_views,
            project_views,
            average_response_time_ms: self.average_response_time_ms(),
            active_users: self.active_users.load(Ordering::Relaxed),
            timestamp: now_iso8601(),
        }
    }

    /// Prometheus text exposition of the request and login counters.
    ///
    /// Rendered from a fresh `snapshot()`. View and latency metrics are not
    /// exported here; they are only available in the JSON snapshot.
    pub fn render_prometheus(&self) -> String {
        let snap = self.snapshot();
        let mut out = String::new();
        render_counter(
            &mut out,
            "portfolio_http_requests_total",
            "Total HTTP requests",
            snap.http_requests_total,
        );
        render_counter(
            &mut out,
            "portfolio_admin_login_success_total",
            "Successful admin logins",
            snap.admin_login_attempts.success,
        );
        render_counter(
            &mut out,
            "portfolio_admin_login_failure_total",
            "Failed admin logins",
            snap.admin_login_attempts.failure,
        );
        out
    }

    fn average_response_time_ms(&self) -> i64 {
        let w = self.window_guard();
        if w.is_empty() {
            return 0;
        }
        let mean = w.iter().sum::<f64>() / w.len() as f64;
        // Halves round toward +inf.
        (mean + 0.5).floor() as i64
    }

    // A poisoned window still holds valid samples; keep using it.
    fn window_guard(&self) -> MutexGuard<'_, VecDeque<f64>> {
        self.response_times
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn bump_labeled(map: &DashMap<String, LabeledCount>, id: &str, label: &str) {
    // The entry guard holds the shard lock, so create + increment + relabel is atomic per id.
    let mut entry = map.entry(id.to_string()).or_insert_with(|| LabeledCount {
        count: 0,
        label: String::new(),
    });
    entry.count += 1;
    if entry.label != label {
        entry.label = label.to_string();
    }
}

fn render_counter(out: &mut String, name: &str, help: &str, value: u64) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} counter");
    let _ = writeln!(out, "{name} {value}");
    out.push('\n');
}

/// Current UTC time as ISO-8601 with millisecond precision (`...T12:00:00.000Z`).
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
