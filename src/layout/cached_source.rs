//! Caching wrapper around another layout source.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::metrics::LayoutMetrics;

use super::source::{LayoutResult, LayoutSource};

/// Keeps successfully loaded layouts in memory. Failures are never cached.
pub struct CachedLayoutSource {
    inner: Arc<dyn LayoutSource>,
    cache: DashMap<String, Arc<str>>,
}

impl CachedLayoutSource {
    pub fn new(inner: Arc<dyn LayoutSource>) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }
}

#[async_trait]
impl LayoutSource for CachedLayoutSource {
    async fn load(&self, name: &str) -> LayoutResult<String> {
        if let Some(cached) = self.cache.get(name) {
            LayoutMetrics::record_cache_hit();
            return Ok(cached.value().to_string());
        }

        let text = self.inner.load(name).await?;
        self.cache.insert(name.to_string(), Arc::from(text.as_str()));

        tracing::debug!(layout = %name, "Layout cached");
        Ok(text)
    }

    fn kind(&self) -> &'static str {
        self.inner.kind()
    }
}
