//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::DirectoryError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A signup or removal rejected by the directory.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The request is missing a parameter or carries an invalid value.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Directory(DirectoryError::ActivityNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            GatewayError::Directory(_) | GatewayError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"detail": self.to_string()}))).into_response()
    }
}
