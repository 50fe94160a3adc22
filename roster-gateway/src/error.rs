//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{Record, RecordNotFound};
use serde_json::json;

/// Errors that can occur during gateway request handling.
///
/// Every variant renders as `{"message": ..., "current_list": [...]}` so
/// clients always see the collection alongside the failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The request body is not a JSON object.
    #[error("Invalid request body: {reason}")]
    InvalidBody { reason: String, current_list: Vec<Record> },

    /// No record has the id named by the request path.
    #[error(transparent)]
    NotFound(#[from] RecordNotFound),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let current_list = match self {
            GatewayError::InvalidBody { current_list, .. } => current_list,
            GatewayError::NotFound(RecordNotFound { snapshot, .. }) => snapshot,
        };
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": message, "current_list": current_list})),
        )
            .into_response()
    }
}
