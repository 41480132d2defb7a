//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::repository::StoreError;

/// Errors surfaced by the flag ingestion endpoint.
///
/// Each variant maps to exactly one wire outcome; internal detail never
/// crosses the HTTP boundary, only the server log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or mismatched bearer credential")]
    Unauthorized,

    #[error("required fields absent: {0:?}")]
    MissingFields(Vec<&'static str>),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => {
                tracing::warn!("unauthorized access attempt detected");
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({"error": "Unauthorized"})),
                )
                    .into_response()
            }
            ApiError::MissingFields(missing) => {
                tracing::warn!(missing_fields = ?missing, "flag payload rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Missing required fields",
                        "missing_fields": missing,
                    })),
                )
                    .into_response()
            }
            ApiError::Storage(e) => {
                tracing::error!("error saving flagged image: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to save flag"})),
                )
                    .into_response()
            }
        }
    }
}
