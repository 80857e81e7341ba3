//! Router-level tests: ingestion, reporting and request tracking.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use folio_core::protocol::MetricsSnapshot;
use folio_server::{app_state::AppState, config, obs::PortfolioMetrics, router};

fn app_with(yaml: &str) -> (Router, Arc<PortfolioMetrics>) {
    let cfg = config::load_from_str(yaml).unwrap();
    let metrics = Arc::new(PortfolioMetrics::with_window(cfg.metrics.response_window));
    let state = AppState::with_metrics(cfg, Arc::clone(&metrics));
    (router::build_router(state).unwrap(), metrics)
}

fn app() -> (Router, Arc<PortfolioMetrics>) {
    app_with("version: 1\n")
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn pageview_accepted_and_counted() {
    let (app, metrics) = app();
    for _ in 0..2 {
        let req = post_json("/api/analytics/pageview", json!({ "page": "home" }));
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "success": true }));
    }
    assert_eq!(metrics.snapshot().page_views.get("home"), Some(&2));
}

#[tokio::test]
async fn pageview_missing_field_is_400() {
    let (app, metrics) = app();
    let (status, body) = send(&app, post_json("/api/analytics/pageview", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "error": "Page parameter required" })
    );
    assert!(metrics.snapshot().page_views.is_empty());
}

#[tokio::test]
async fn blog_and_project_views() {
    let (app, metrics) = app();
    let (status, _) = send(
        &app,
        post_json("/api/analytics/blog-view", json!({ "blogId": "b1", "blogTitle": "Title A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        post_json("/api/analytics/blog-view", json!({ "blogId": "b1", "blogTitle": "Title B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        post_json(
            "/api/analytics/project-view",
            json!({ "projectId": "p1", "projectName": "Gateway" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let s = metrics.snapshot();
    let b1 = s.blog_views.get("b1").unwrap();
    assert_eq!((b1.count, b1.title.as_str()), (2, "Title B"));
    let p1 = s.project_views.get("p1").unwrap();
    assert_eq!((p1.count, p1.name.as_str()), (1, "Gateway"));
}

#[tokio::test]
async fn blog_and_project_missing_fields_are_400() {
    let (app, _) = app();
    let req = post_json("/api/analytics/blog-view", json!({ "blogId": "b1" }));
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Blog ID and title required"));

    let (status, body) = send(
        &app,
        post_json("/api/analytics/project-view", json!({ "projectName": "Gateway" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Project ID and name required"));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (app, _) = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/analytics/pageview")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(serde_json::from_str::<Value>(&body).unwrap().get("error").is_some());
}

#[tokio::test]
async fn metrics_json_reports_snapshot() {
    let (app, metrics) = app();
    metrics.record_login_attempt(true);
    metrics.record_login_attempt(false);
    metrics.record_page_view("about");

    for uri in ["/metrics", "/api/analytics"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        let snap: MetricsSnapshot = serde_json::from_str(&body).unwrap();
        assert_eq!(snap.admin_login_attempts.success, 1);
        assert_eq!(snap.admin_login_attempts.failure, 1);
        assert_eq!(snap.page_views.get("about"), Some(&1));
        assert_eq!(snap.active_users, 0);
    }
}

#[tokio::test]
async fn prometheus_route_is_plain_text() {
    let (app, metrics) = app();
    metrics.record_login_attempt(true);

    let res = app.clone().oneshot(get("/metrics/prometheus")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let ct = res.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.starts_with("text/plain"));
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(text.matches("# TYPE").count(), 3);
    assert!(text.contains("portfolio_admin_login_success_total 1\n"));
}

#[tokio::test]
async fn health_reports_uptime() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["status"], "healthy");
    assert!(v["uptime"].as_f64().unwrap() >= 0.0);
    assert!(v["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn every_request_is_tracked() {
    let (app, metrics) = app();
    send(&app, get("/health")).await;
    send(&app, post_json("/api/analytics/pageview", json!({}))).await;
    let (status, _) = send(&app, get("/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(metrics.snapshot().http_requests_total, 3);
    assert_eq!(metrics.response_window_len(), 3);
}

#[tokio::test]
async fn tracking_can_be_disabled() {
    let (app, metrics) = app_with("version: 1\nmetrics:\n  track_requests: false\n");
    send(&app, get("/health")).await;
    send(&app, post_json("/api/analytics/pageview", json!({ "page": "home" }))).await;

    let s = metrics.snapshot();
    assert_eq!(s.http_requests_total, 0);
    assert_eq!(s.page_views.get("home"), Some(&1));
    assert_eq!(metrics.response_window_len(), 0);
}

#[tokio::test]
async fn numeric_ids_are_accepted() {
    let (app, metrics) = app();
    let req = post_json("/api/analytics/blog-view", json!({ "blogId": 42, "blogTitle": "Title" }));
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(metrics.snapshot().blog_views.get("42").map(|v| v.count), Some(1));
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let (app, _) = app();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/analytics/pageview")
        .header(header::ORIGIN, "https://rohitdhawadkar.in")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert!(res.status().is_success(), "preflight status {}", res.status());
    let h = res.headers();
    assert_eq!(h[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://rohitdhawadkar.in");
    assert_eq!(h[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    let methods = h[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("POST"), "{methods}");
    let headers = h[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    assert!(headers.contains("content-type"), "{headers}");
}

#[tokio::test]
async fn cors_headers_on_simple_post() {
    let (app, _) = app();
    let mut req = post_json("/api/analytics/pageview", json!({ "page": "home" }));
    req.headers_mut().insert(header::ORIGIN, "https://rohitdhawadkar.in".parse().unwrap());
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let acao = &res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN];
    assert_eq!(acao, "https://rohitdhawadkar.in");
}

#[tokio::test]
async fn cors_ignores_other_origins() {
    let (app, _) = app();
    let mut req = post_json("/api/analytics/pageview", json!({ "page": "home" }));
    req.headers_mut().insert(header::ORIGIN, "https://evil.example".parse().unwrap());
    let res = app.clone().oneshot(req).await.unwrap();

    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
