//! In-memory layout source.

use async_trait::async_trait;
use dashmap::DashMap;

use super::source::{validate_layout_name, LayoutError, LayoutResult, LayoutSource};

/// Layouts held in memory, keyed by name. Useful for embedding and tests.
#[derive(Default)]
pub struct StaticLayoutSource {
    layouts: DashMap<String, String>,
}

impl StaticLayoutSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a layout
    pub fn with_layout(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Register or replace a layout
    pub fn insert(&self, name: impl Into<String>, text: impl Into<String>) {
        self.layouts.insert(name.into(), text.into());
    }

    /// Remove a layout, returning whether it existed
    pub fn remove(&self, name: &str) -> bool {
        self.layouts.remove(name).is_some()
    }
}

#[async_trait]
impl LayoutSource for StaticLayoutSource {
    async fn load(&self, name: &str) -> LayoutResult<String> {
        validate_layout_name(name)?;

        self.layouts
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LayoutError::NotFound(name.to_string()))
    }

    fn kind(&self) -> &'static str {
        "static"
    }
}
