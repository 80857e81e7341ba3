use std::net::SocketAddr;

use axum::http::HeaderValue;
use folio_core::error::{FolioError, Result};
use serde::Deserialize;

use crate::obs::RESPONSE_WINDOW_MAX;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FolioError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.metrics.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Browser origin allowed to call the API (credentials included).
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors_origin: default_cors_origin(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.cors_origin_header()?;
        Ok(())
    }

    /// Credentialed CORS cannot use a wildcard, so the origin must be exact.
    pub fn cors_origin_header(&self) -> Result<HeaderValue> {
        if self.cors_origin.is_empty() || self.cors_origin == "*" {
            return Err(FolioError::BadRequest("server.cors_origin must be an exact origin".into()));
        }
        HeaderValue::from_str(&self.cors_origin).map_err(|e| {
            FolioError::BadRequest(format!("server.cors_origin is not a valid header value: {e}"))
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            FolioError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}
fn default_cors_origin() -> String {
    "https://rohitdhawadkar.in".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Response-time samples kept for the rolling mean.
    #[serde(default = "default_response_window")]
    pub response_window: usize,

    /// Count and time every request through the tracking middleware.
    #[serde(default = "default_track_requests")]
    pub track_requests: bool,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            response_window: default_response_window(),
            track_requests: default_track_requests(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=RESPONSE_WINDOW_MAX).contains(&self.response_window) {
            return Err(FolioError::BadRequest(format!(
                "metrics.response_window must be between 1 and {RESPONSE_WINDOW_MAX}"
            )));
        }
        Ok(())
    }
}

fn default_response_window() -> usize {
    RESPONSE_WINDOW_MAX
}
fn default_track_requests() -> bool {
    true
}
