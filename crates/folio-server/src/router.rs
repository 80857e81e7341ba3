//! Axum router wiring.
//!
//! Reporting, health and analytics ingestion routes behind a CORS layer for
//! the configured frontend origin, wrapped in the request tracking middleware
//! unless `metrics.track_requests` is off.

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use folio_core::error::Result;

use crate::{analytics, app_state::AppState, http, ops};

pub fn build_router(state: AppState) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(state.cfg().server.cors_origin_header()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = Router::new()
        .route("/health", get(ops::health))
        .route("/metrics", get(ops::metrics_json))
        .route("/metrics/prometheus", get(ops::metrics_prometheus))
        .route("/api/analytics", get(analytics::summary))
        .route("/api/analytics/pageview", post(analytics::page_view))
        .route("/api/analytics/blog-view", post(analytics::blog_view))
        .route("/api/analytics/project-view", post(analytics::project_view))
        .fallback(ops::not_found)
        .layer(cors);

    // Outermost, so preflights are counted like any other request.
    let router = if state.cfg().metrics.track_requests {
        router.layer(middleware::from_fn_with_state(state.clone(), http::track_requests))
    } else {
        router
    };

    Ok(router.with_state(state))
}
