//! HTTP error handling
//!
//! Every failure leaves the server as `{ success: false, message, code }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use category_tree_core::services::CategoryServiceError;
use serde::{Deserialize, Serialize};

/// JSON error body returned by every endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// Always `false`; lets clients branch on one field for every response
    pub success: bool,
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: code.into(),
        }
    }

    /// Fallback for unmatched routes
    pub fn route_not_found() -> Self {
        Self::new("Route not found", "ROUTE_NOT_FOUND")
    }

    /// Status code for this error's code
    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "CATEGORY_NOT_FOUND" | "ROUTE_NOT_FOUND" => StatusCode::NOT_FOUND,
            "VALIDATION_ERROR" | "PARENT_NOT_FOUND" | "CIRCULAR_REFERENCE" => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self)).into_response()
    }
}

impl From<CategoryServiceError> for HttpError {
    fn from(err: CategoryServiceError) -> Self {
        HttpError::new(err.to_string(), err.code())
    }
}
