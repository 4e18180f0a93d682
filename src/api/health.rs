//! Health check endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::server::AppState;
use crate::template::missing_placeholders;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: StorageHealthResponse,
    pub layout: LayoutHealthResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgres: Option<PostgresHealthResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StorageHealthResponse {
    pub backend: String,
    pub reachable: bool,
    pub templates: usize,
    pub images: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutHealthResponse {
    pub source: String,
    pub name: String,
    pub available: bool,
    /// Placeholder tokens the layout does not contain
    pub missing_placeholders: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostgresHealthResponse {
    pub url: String,
    pub pool_size: u32,
    pub idle_connections: u32,
}

/// GET /health - Service, storage and layout health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = state.start_time.elapsed().as_secs();

    let store_reachable = match state.record_store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Record store health check failed");
            false
        }
    };
    let store_stats = state.record_store.stats().await;

    let layout_name = state.settings.layout.name.clone();
    let (layout_available, missing) = match state.layout_source.load(&layout_name).await {
        Ok(text) => (
            true,
            missing_placeholders(&text)
                .into_iter()
                .map(str::to_string)
                .collect(),
        ),
        Err(e) => {
            tracing::warn!(layout = %layout_name, error = %e, "Layout health check failed");
            (false, Vec::new())
        }
    };

    let postgres = state.postgres_pool.as_ref().map(|pool| {
        let inner_pool = pool.pool();
        PostgresHealthResponse {
            url: pool.database_url_masked(),
            pool_size: inner_pool.size(),
            idle_connections: inner_pool.num_idle() as u32,
        }
    });

    let status = if store_reachable && layout_available {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        storage: StorageHealthResponse {
            backend: store_stats.backend_type,
            reachable: store_reachable,
            templates: store_stats.templates,
            images: store_stats.images,
        },
        layout: LayoutHealthResponse {
            source: state.layout_source.kind().to_string(),
            name: layout_name,
            available: layout_available,
            missing_placeholders: missing,
        },
        postgres,
    })
}
