//! Filesystem-backed layout source.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::source::{validate_layout_name, LayoutError, LayoutResult, LayoutSource};

/// Reads layouts from a directory on every request.
pub struct FileLayoutSource {
    dir: PathBuf,
}

impl FileLayoutSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl LayoutSource for FileLayoutSource {
    async fn load(&self, name: &str) -> LayoutResult<String> {
        validate_layout_name(name)?;

        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                tracing::debug!(path = %path.display(), bytes = text.len(), "Layout loaded");
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(LayoutError::NotFound(name.to_string()))
            }
            Err(e) => Err(LayoutError::Io {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_existing_layout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("layout.html"), "<h1>{{title}}</h1>").unwrap();

        let source = FileLayoutSource::new(dir.path());
        let text = source.load("layout.html").await.unwrap();
        assert_eq!(text, "<h1>{{title}}</h1>");
    }

    #[tokio::test]
    async fn test_missing_layout() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileLayoutSource::new(dir.path());

        assert!(matches!(
            source.load("layout.html").await,
            Err(LayoutError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileLayoutSource::new(dir.path().join("public"));

        assert!(matches!(
            source.load("../layout.html").await,
            Err(LayoutError::InvalidName(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.html"), [0xff, 0xfe, 0xfd]).unwrap();

        let source = FileLayoutSource::new(dir.path());
        assert!(matches!(
            source.load("broken.html").await,
            Err(LayoutError::Io { .. })
        ));
    }
}
