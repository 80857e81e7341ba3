//! Shared application state for the folio server.
//!
//! Holds the validated config and the single `PortfolioMetrics` instance that
//! every handler and the tracking middleware record into.

use std::sync::Arc;

use folio_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::PortfolioMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<PortfolioMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
}

impl AppState {
    /// Build application state from a config, validating it first.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        cfg.validate()?;
        let metrics = Arc::new(PortfolioMetrics::with_window(cfg.metrics.response_window));
        Ok(Self::with_metrics(cfg, metrics))
    }

    /// Build around an existing aggregator (tests inspect it directly).
    pub fn with_metrics(cfg: ServerConfig, metrics: Arc<PortfolioMetrics>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &PortfolioMetrics {
        &self.metrics
    }
}
