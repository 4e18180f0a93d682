//! Layout source trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while loading a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Name is empty or would escape the layout directory
    #[error("Invalid layout name: {0:?}")]
    InvalidName(String),

    /// No layout exists under this name
    #[error("Layout not found: {0}")]
    NotFound(String),

    /// Layout exists but could not be read
    #[error("Failed to read layout {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Source of static HTML layout text, looked up by name.
///
/// Implementations must be thread-safe (`Send + Sync`) as a single source is
/// shared by all request handlers.
#[async_trait]
pub trait LayoutSource: Send + Sync {
    /// Load the raw layout text registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NotFound` if there is no such layout,
    /// `LayoutError::InvalidName` for names the source refuses to resolve and
    /// `LayoutError::Io` for read failures.
    async fn load(&self, name: &str) -> LayoutResult<String>;

    /// Short identifier of the source kind, for logs and health output.
    fn kind(&self) -> &'static str;
}

/// Reject names that are empty or could address a path outside the source.
pub fn validate_layout_name(name: &str) -> LayoutResult<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(&['/', '\\', '\0'][..]);

    if invalid {
        return Err(LayoutError::InvalidName(name.to_string()));
    }

    Ok(())
}
