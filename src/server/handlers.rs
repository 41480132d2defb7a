//! HTTP endpoint handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::AppState;
use crate::models::Flag;

/// Wire shape of a successful ingestion.
#[derive(Serialize)]
pub struct FlagSaved {
    status: &'static str,
    message: &'static str,
}

/// Accept a moderation flag for a generated image and persist it.
///
/// Authentication already happened in the route layer; by the time this
/// runs the caller holds the shared secret.
pub async fn flag_image(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<FlagSaved>, ApiError> {
    let flag = Flag::from_json(&payload).map_err(ApiError::MissingFields)?;

    // Log the seed parameter specifically, for audit
    tracing::info!(seed = %flag.seed, "seed parameter");

    state.flags.insert(&flag).await?;

    tracing::info!("flagged image data saved for prompt '{}'", flag.image_prompt);

    Ok(Json(FlagSaved {
        status: "success",
        message: "Image flagged and saved successfully.",
    }))
}

/// Health check endpoint for container orchestration. Never touches the
/// store, so it stays green even when the database is unreachable.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy"}))
}
