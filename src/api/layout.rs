//! Layout endpoint.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::error::Result;
use crate::metrics::LayoutMetrics;
use crate::server::AppState;

pub(crate) const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Load the configured layout, counting failures
pub(crate) async fn load_configured_layout(state: &AppState) -> Result<String> {
    let name = &state.settings.layout.name;

    state.layout_source.load(name).await.map_err(|e| {
        LayoutMetrics::record_load_failure();
        tracing::error!(layout = %name, error = %e, "Failed to load email layout");
        e.into()
    })
}

/// GET /api/layout - Raw layout HTML with placeholders intact
#[tracing::instrument(name = "http.get_layout", skip(state))]
pub async fn get_layout(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let layout = load_configured_layout(&state).await?;

    Ok(([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], layout))
}
