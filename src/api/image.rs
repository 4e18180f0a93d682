//! Image endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, Result};
use crate::metrics::{StoreMetrics, ValidationMetrics};
use crate::server::AppState;
use crate::template::{ImageRecord, ImageRequest, SaveResponse};

/// POST /api/images - Save an image reference
#[tracing::instrument(name = "http.save_image", skip(state, payload))]
pub async fn save_image(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ImageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let image_url = payload
        .map_err(AppError::from)
        .and_then(|Json(request)| request.validate().map_err(AppError::from))
        .inspect_err(|_| ValidationMetrics::record_failure())?;

    let record = state
        .record_store
        .insert_image(ImageRecord::new(image_url))
        .await
        .map_err(|e| {
            StoreMetrics::record_failure("image");
            AppError::from(e)
        })?;

    StoreMetrics::record_saved("image");
    tracing::info!(image_id = %record.id, "Image saved");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            message: "Image uploaded successfully".to_string(),
            id: record.id,
        }),
    ))
}
