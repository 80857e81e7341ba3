//! Operational HTTP endpoints.
//!
//! - `/health`             : liveness with uptime
//! - `/metrics`            : metrics snapshot as JSON
//! - `/metrics/prometheus` : Prometheus text format
//! - fallback              : JSON 404

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app_state::AppState;
use crate::obs::metrics::now_iso8601;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": now_iso8601(),
            "uptime": state.metrics().uptime().as_secs_f64(),
        })),
    )
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub async fn metrics_json(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics().snapshot())
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> Response {
    let body = state.metrics().render_prometheus();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
