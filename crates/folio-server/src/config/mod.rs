//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use folio_core::error::{FolioError, Result};

pub use schema::{MetricsSection, ServerConfig, ServerSection};

/// Env var overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "folio.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FolioError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| FolioError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `$FOLIO_CONFIG` or `folio.yaml`.
pub fn load() -> Result<ServerConfig> {
    let explicit = std::env::var(CONFIG_PATH_ENV).ok();
    load_from(explicit.as_deref(), DEFAULT_CONFIG_PATH)
}

/// An explicit path must exist; a missing default file means defaults.
pub fn load_from(path: Option<&str>, default_path: &str) -> Result<ServerConfig> {
    if let Some(path) = path {
        return load_from_file(path);
    }
    match fs::read_to_string(default_path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = default_path, "config file not found, using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(FolioError::Internal(format!("read config failed: {e}"))),
    }
}
