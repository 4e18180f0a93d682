//! Template endpoints: save, render-and-download, preview and read-back.

use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::{AppError, Result};
use crate::metrics::{RenderMetrics, StoreMetrics, ValidationMetrics};
use crate::server::AppState;
use crate::template::{
    parse_record_id, render_with, SaveResponse, TemplateFields, TemplateListResponse,
    TemplateRecord, TemplateRequest,
};

use super::layout::{load_configured_layout, HTML_CONTENT_TYPE};

/// Unwrap the JSON body and require all four fields
pub(crate) fn validated_fields(
    payload: std::result::Result<Json<TemplateRequest>, JsonRejection>,
) -> Result<TemplateFields> {
    payload
        .map_err(AppError::from)
        .and_then(|Json(request)| request.validate().map_err(AppError::from))
        .inspect_err(|_| ValidationMetrics::record_failure())
}

/// Load the layout and substitute the fields, returning the finished HTML
async fn render_document(state: &AppState, fields: &TemplateFields) -> Result<(String, Duration)> {
    let layout = load_configured_layout(state).await?;

    let started = Instant::now();
    let html = render_with(&layout, fields, state.settings.render.substitution);
    Ok((html, started.elapsed()))
}

/// POST /api/templates - Save a template record
#[tracing::instrument(name = "http.save_template", skip(state, payload))]
pub async fn save_template(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TemplateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let fields = validated_fields(payload)?;

    let record = state
        .record_store
        .insert_template(TemplateRecord::new(fields))
        .await
        .map_err(|e| {
            StoreMetrics::record_failure("template");
            AppError::from(e)
        })?;

    StoreMetrics::record_saved("template");
    tracing::info!(template_id = %record.id, "Template saved");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            message: "Template saved successfully".to_string(),
            id: record.id,
        }),
    ))
}

/// POST /api/templates/render - Render the layout and return it as a download
#[tracing::instrument(name = "http.render_download", skip(state, payload))]
pub async fn render_download(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TemplateRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let fields = validated_fields(payload)?;
    let (html, elapsed) = render_document(&state, &fields).await?;
    RenderMetrics::record_download(elapsed);

    let disposition = format!(
        "attachment; filename={}",
        state.settings.render.download_filename
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(format!("Invalid download filename: {}", e)))?;

    tracing::debug!(bytes = html.len(), "Rendered template for download");

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        html,
    ))
}

/// POST /api/templates/preview - Render the layout inline
#[tracing::instrument(name = "http.preview_template", skip(state, payload))]
pub async fn preview_template(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TemplateRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let fields = validated_fields(payload)?;
    let (html, elapsed) = render_document(&state, &fields).await?;
    RenderMetrics::record_preview(elapsed);

    Ok(([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], html))
}

/// GET /api/templates/default - Starter values for a new template
pub async fn default_template() -> Json<TemplateFields> {
    Json(TemplateFields::starter())
}

/// GET /api/templates - List saved templates
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(State(state): State<AppState>) -> Result<Json<TemplateListResponse>> {
    let templates = state.record_store.list_templates().await?;
    let total = templates.len();

    Ok(Json(TemplateListResponse { templates, total }))
}

/// GET /api/templates/{id} - Get a saved template
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateRecord>> {
    let id = parse_record_id(&id)?;

    state
        .record_store
        .get_template(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template {} not found", id)))
}
