//! folio server
//!
//! - Reporting: /metrics (JSON), /metrics/prometheus (text), /health
//! - Ingestion: /api/analytics/{pageview,blog-view,project-view}
//! - Every request counted and timed into the in-process aggregator

use tracing_subscriber::{fmt, EnvFilter};

use folio_core::error::{FolioError, Result};
use folio_server::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load()?;
    let listen = cfg.server.listen_addr()?;
    let window = cfg.metrics.response_window;
    let tracking = cfg.metrics.track_requests;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state)?;

    tracing::info!(%listen, window, tracking, "folio-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FolioError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| FolioError::Internal(format!("server failed: {e}")))
}
