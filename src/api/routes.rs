use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::health;
use super::image::save_image;
use super::layout::get_layout;
use super::metrics::prometheus_metrics;
use super::template::{
    default_template, get_template, list_templates, preview_template, render_download,
    save_template,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest(
            "/api",
            Router::new()
                // Layout
                .route("/layout", get(get_layout))
                // Templates
                .route("/templates", get(list_templates).post(save_template))
                .route("/templates/default", get(default_template))
                .route("/templates/render", post(render_download))
                .route("/templates/preview", post(preview_template))
                .route("/templates/{id}", get(get_template))
                // Images
                .route("/images", post(save_image))
                // Legacy route names used by existing editor clients
                .route("/getEmailLayout", get(get_layout))
                .route("/renderAndDownloadTemplate", post(render_download))
                .route("/uploadEmailConfig", post(save_template))
                .route("/uploadImage", post(save_image)),
        )
}
