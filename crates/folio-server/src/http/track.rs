//! Request tracking middleware.
//!
//! Runs around every route: once the inner service has produced a response,
//! the request is counted and its wall-clock duration pushed into the
//! response-time window. Route is the matched template (`/api/analytics/pageview`),
//! falling back to the raw path for unmatched requests.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let res = next.run(req).await;

    let dur_ms = started.elapsed().as_secs_f64() * 1000.0;
    let status = res.status().as_u16();
    let metrics = state.metrics();
    metrics.increment_http_requests(method.as_str(), &route, status);
    metrics.record_response_time(dur_ms);

    tracing::debug!(method = %method, %route, status, dur_ms, "request tracked");
    res
}
