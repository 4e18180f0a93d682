//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    LAYOUT_CACHE_HITS_TOTAL, LAYOUT_LOAD_FAILURES_TOTAL, PERSISTENCE_FAILURES_TOTAL,
    RECORDS_SAVED_TOTAL, RECORDS_STORED, RENDERS_TOTAL, RENDER_DURATION_SECONDS,
    VALIDATION_FAILURES_TOTAL,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording render metrics
pub struct RenderMetrics;

impl RenderMetrics {
    /// Record a render for download
    pub fn record_download(elapsed: Duration) {
        RENDERS_TOTAL.with_label_values(&["download"]).inc();
        RENDER_DURATION_SECONDS.observe(elapsed.as_secs_f64());
    }

    /// Record a render for inline preview
    pub fn record_preview(elapsed: Duration) {
        RENDERS_TOTAL.with_label_values(&["preview"]).inc();
        RENDER_DURATION_SECONDS.observe(elapsed.as_secs_f64());
    }
}

/// Helper struct for recording layout metrics
pub struct LayoutMetrics;

impl LayoutMetrics {
    pub fn record_load_failure() {
        LAYOUT_LOAD_FAILURES_TOTAL.inc();
    }

    pub fn record_cache_hit() {
        LAYOUT_CACHE_HITS_TOTAL.inc();
    }
}

/// Helper struct for recording record store metrics
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record a persisted record of the given kind
    pub fn record_saved(kind: &str) {
        RECORDS_SAVED_TOTAL.with_label_values(&[kind]).inc();
    }

    /// Record a failed insert of the given kind
    pub fn record_failure(kind: &str) {
        PERSISTENCE_FAILURES_TOTAL.with_label_values(&[kind]).inc();
    }

    /// Set the number of stored records of the given kind
    pub fn set_stored(kind: &str, count: usize) {
        RECORDS_STORED.with_label_values(&[kind]).set(count as i64);
    }
}

/// Helper struct for recording validation metrics
pub struct ValidationMetrics;

impl ValidationMetrics {
    pub fn record_failure() {
        VALIDATION_FAILURES_TOTAL.inc();
    }
}
