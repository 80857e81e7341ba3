use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use folio_core::error::{ClientCode, FolioError};

/// Route-level error. Renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub FolioError);

impl From<FolioError> for ApiError {
    fn from(e: FolioError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self(FolioError::BadRequest(e.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();
        if status.is_server_error() {
            tracing::error!(code, error = %self.0, "request failed");
        } else {
            tracing::debug!(code, error = %self.0, "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
