//! Prometheus metrics for the email builder service.
//!
//! This module provides metrics for monitoring the service:
//! - Render metrics (renders by operation, render latency)
//! - Layout metrics (load failures, cache hits)
//! - Record store metrics (saved records, persistence failures, stored totals)
//! - Validation failures

mod helpers;

pub use helpers::{encode_metrics, LayoutMetrics, RenderMetrics, StoreMetrics, ValidationMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, register_int_gauge_vec,
    Histogram, IntCounter, IntCounterVec, IntGaugeVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "email_builder";

lazy_static! {
    // ============================================================================
    // Render Metrics
    // ============================================================================

    /// Total renders by operation (download, preview)
    pub static ref RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_renders_total", METRIC_PREFIX),
        "Total template renders",
        &["operation"]
    ).unwrap();

    /// Time spent substituting placeholders
    pub static ref RENDER_DURATION_SECONDS: Histogram = register_histogram!(
        format!("{}_render_duration_seconds", METRIC_PREFIX),
        "Placeholder substitution latency in seconds",
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01]
    ).unwrap();

    // ============================================================================
    // Layout Metrics
    // ============================================================================

    /// Layout loads that failed
    pub static ref LAYOUT_LOAD_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_layout_load_failures_total", METRIC_PREFIX),
        "Total failed layout loads"
    ).unwrap();

    /// Layout loads served from the in-memory cache
    pub static ref LAYOUT_CACHE_HITS_TOTAL: IntCounter = register_int_counter!(
        format!("{}_layout_cache_hits_total", METRIC_PREFIX),
        "Total layout loads served from cache"
    ).unwrap();

    // ============================================================================
    // Record Store Metrics
    // ============================================================================

    /// Records persisted by kind (template, image)
    pub static ref RECORDS_SAVED_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_records_saved_total", METRIC_PREFIX),
        "Total records persisted",
        &["kind"]
    ).unwrap();

    /// Persistence failures by kind
    pub static ref PERSISTENCE_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_persistence_failures_total", METRIC_PREFIX),
        "Total failed record inserts",
        &["kind"]
    ).unwrap();

    /// Records currently held by the store, by kind
    pub static ref RECORDS_STORED: IntGaugeVec = register_int_gauge_vec!(
        format!("{}_records_stored", METRIC_PREFIX),
        "Number of records held by the record store",
        &["kind"]
    ).unwrap();

    // ============================================================================
    // Validation Metrics
    // ============================================================================

    /// Requests rejected for missing or malformed fields
    pub static ref VALIDATION_FAILURES_TOTAL: IntCounter = register_int_counter!(
        format!("{}_validation_failures_total", METRIC_PREFIX),
        "Total requests rejected by validation"
    ).unwrap();
}
