//! Layout store for the static HTML email layouts.
//!
//! # Architecture
//!
//! Layout text is fetched by name through the `LayoutSource` trait:
//!
//! - `FileLayoutSource`: reads `<dir>/<name>` from disk on every request (default)
//! - `CachedLayoutSource`: wraps another source and keeps loaded layouts in memory
//! - `StaticLayoutSource`: layouts registered in memory
//!
//! Use `create_layout_source()` to build the configured source.

mod cached_source;
mod file_source;
mod memory_source;
mod source;

use std::sync::Arc;

use crate::config::LayoutConfig;

pub use cached_source::CachedLayoutSource;
pub use file_source::FileLayoutSource;
pub use memory_source::StaticLayoutSource;
pub use source::{validate_layout_name, LayoutError, LayoutResult, LayoutSource};

/// Create the layout source described by configuration.
pub fn create_layout_source(config: &LayoutConfig) -> Arc<dyn LayoutSource> {
    let file_source: Arc<dyn LayoutSource> = Arc::new(FileLayoutSource::new(&config.dir));

    if config.cache {
        tracing::info!(dir = %config.dir, cache = true, "Creating cached file layout source");
        Arc::new(CachedLayoutSource::new(file_source))
    } else {
        tracing::info!(dir = %config.dir, cache = false, "Creating file layout source");
        file_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_factory_reads_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("custom.html"), "{{title}}").unwrap();

        let config = LayoutConfig {
            dir: dir.path().to_string_lossy().into_owned(),
            name: "custom.html".to_string(),
            cache: true,
        };

        let source = create_layout_source(&config);
        assert_eq!(source.kind(), "file");
        assert_eq!(source.load(&config.name).await.unwrap(), "{{title}}");
    }
}
