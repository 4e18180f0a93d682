//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod image;
mod layout;
mod metrics;
mod routes;
mod template;

// Re-export all handlers for use in server/app.rs
pub use health::{
    health, HealthResponse, LayoutHealthResponse, PostgresHealthResponse, StorageHealthResponse,
};
pub use image::save_image;
pub use layout::get_layout;
pub use metrics::prometheus_metrics;
pub use routes::api_routes;
pub use template::{
    default_template, get_template, list_templates, preview_template, render_download,
    save_template,
};
