//! Analytics routes under `/api/analytics`.
//!
//! Ingestion handlers validate the posted body and forward it to the
//! aggregator; missing or empty fields are rejected here with 400, the
//! aggregator itself accepts anything.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use folio_core::protocol::{BlogViewRequest, PageViewRequest, ProjectViewRequest};

use crate::app_state::AppState;
use crate::http::ApiError;

fn accepted() -> impl IntoResponse {
    Json(json!({ "success": true }))
}

/// `GET /api/analytics`
pub async fn summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics().snapshot())
}

/// `POST /api/analytics/pageview`
pub async fn page_view(
    State(state): State<AppState>,
    body: Result<Json<PageViewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let ev = req.validate()?;
    state.metrics().record_page_view(&ev.page);
    Ok(accepted())
}

/// `POST /api/analytics/blog-view`
pub async fn blog_view(
    State(state): State<AppState>,
    body: Result<Json<BlogViewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let ev = req.validate()?;
    state.metrics().record_blog_view(&ev.blog_id, &ev.title);
    Ok(accepted())
}

/// `POST /api/analytics/project-view`
pub async fn project_view(
    State(state): State<AppState>,
    body: Result<Json<ProjectViewRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let ev = req.validate()?;
    state.metrics().record_project_view(&ev.project_id, &ev.name);
    Ok(accepted())
}
