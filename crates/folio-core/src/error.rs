//! Shared error type across folio crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / missing fields.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// Stable string form, logged alongside every rejected request.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Unified error type used by core and server.
///
/// The metrics aggregator never fails; these variants cover its
/// collaborators (ingestion validation, config loading, startup).
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("{0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FolioError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FolioError::BadRequest(_) => ClientCode::BadRequest,
            FolioError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            FolioError::Internal(_) => ClientCode::Internal,
        }
    }
}
