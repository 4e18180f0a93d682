//! Template and image record types, request payloads and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Request validation error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("imageUrl must be an http or https URL: {0}")]
    InvalidImageUrl(String),

    #[error("Invalid record id: {0}")]
    InvalidId(String),
}

/// Result type for request validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// The four values substituted into a layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFields {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub footer: String,
}

impl TemplateFields {
    /// Starter values the editor resets to
    pub fn starter() -> Self {
        Self {
            title: "Welcome to Our Newsletter".to_string(),
            content: "Hello there! We're excited to have you here. This is a sample email \
                      template that you can customize to your needs. Feel free to modify the \
                      content, add images, and make it your own!"
                .to_string(),
            image_url: "https://t4.ftcdn.net/jpg/05/70/26/97/360_F_570269734_gE4Za4bdlmm5MLhjScliP4zmOORgDJ3t.jpg"
                .to_string(),
            footer: "© 2024 Your Company. All rights reserved.".to_string(),
        }
    }
}

/// Incoming template payload for save, render and preview.
///
/// Every field is optional on the wire so that absent fields surface as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
}

impl TemplateRequest {
    /// Require all four fields to be present and non-empty, and `imageUrl`
    /// to be an http(s) URL
    pub fn validate(self) -> ValidationResult<TemplateFields> {
        let mut missing = Vec::new();

        let title = require(self.title, "title", &mut missing);
        let content = require(self.content, "content", &mut missing);
        let image_url = require(self.image_url, "imageUrl", &mut missing);
        let footer = require(self.footer, "footer", &mut missing);

        match (title, content, image_url, footer) {
            (Some(title), Some(content), Some(image_url), Some(footer)) => Ok(TemplateFields {
                title,
                content,
                image_url: require_http_url(image_url)?,
                footer,
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

/// Incoming image payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ImageRequest {
    /// Require a non-empty http(s) image URL
    pub fn validate(self) -> ValidationResult<String> {
        let mut missing = Vec::new();
        let image_url = require(self.image_url, "imageUrl", &mut missing)
            .ok_or(ValidationError::MissingFields(missing))?;
        require_http_url(image_url)
    }
}

fn require(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}

/// Accept `http://` or `https://` (any case) followed by at least a host
fn require_http_url(url: String) -> ValidationResult<String> {
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));

    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(url),
        _ => Err(ValidationError::InvalidImageUrl(url)),
    }
}

/// Parse a record id from a path segment
pub fn parse_record_id(raw: &str) -> ValidationResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// A persisted email template. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Server-assigned identifier
    pub id: Uuid,

    pub title: String,
    pub content: String,
    pub image_url: String,
    pub footer: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl TemplateRecord {
    /// Create a new record with a fresh id
    pub fn new(fields: TemplateFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            image_url: fields.image_url,
            footer: fields.footer,
            created_at: Utc::now(),
        }
    }
}

/// A persisted image reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl ImageRecord {
    pub fn new(image_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_url,
            created_at: Utc::now(),
        }
    }
}

/// Acknowledgment returned after a record is saved
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub message: String,
    pub id: Uuid,
}

/// Response for listing templates
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateListResponse {
    /// Templates, newest first
    pub templates: Vec<TemplateRecord>,

    /// Total count
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> TemplateRequest {
        TemplateRequest {
            title: Some("Hi".to_string()),
            content: Some("Body".to_string()),
            image_url: Some("http://x/y.png".to_string()),
            footer: Some("Bye".to_string()),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let fields = full_request().validate().unwrap();
        assert_eq!(fields.title, "Hi");
        assert_eq!(fields.image_url, "http://x/y.png");
    }

    #[test]
    fn test_validate_missing_content() {
        let mut request = full_request();
        request.content = None;

        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingFields(vec!["content"]))
        );
    }

    #[test]
    fn test_validate_empty_counts_as_missing() {
        let request = TemplateRequest {
            title: Some(String::new()),
            footer: Some(String::new()),
            ..full_request()
        };

        let err = request.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["title", "footer"]));
        assert_eq!(err.to_string(), "Missing required fields: title, footer");
    }

    #[test]
    fn test_validate_rejects_non_http_image_url() {
        for bad in ["javascript:alert(1)", "/images/a.png", "ftp://host/a.png", "https://"] {
            let request = TemplateRequest {
                image_url: Some(bad.to_string()),
                ..full_request()
            };
            assert_eq!(
                request.validate(),
                Err(ValidationError::InvalidImageUrl(bad.to_string()))
            );
        }

        let request = TemplateRequest {
            image_url: Some("HTTPS://CDN.example.com/A.png".to_string()),
            ..full_request()
        };
        assert_eq!(
            request.validate().unwrap().image_url,
            "HTTPS://CDN.example.com/A.png"
        );
    }

    #[test]
    fn test_missing_fields_reported_before_url_check() {
        let request = TemplateRequest {
            image_url: Some("not a url".to_string()),
            title: None,
            ..full_request()
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingFields(vec!["title"]))
        );
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: TemplateRequest = serde_json::from_value(json!({
            "title": "Hi",
            "content": "Body",
            "imageUrl": "http://x/y.png"
        }))
        .unwrap();

        assert_eq!(request.image_url.as_deref(), Some("http://x/y.png"));
        assert!(request.footer.is_none());
    }

    #[test]
    fn test_image_request_validation() {
        let ok = ImageRequest {
            image_url: Some("https://cdn.example.com/a.png".to_string()),
        };
        assert_eq!(ok.validate().unwrap(), "https://cdn.example.com/a.png");

        let missing = ImageRequest::default();
        assert_eq!(
            missing.validate(),
            Err(ValidationError::MissingFields(vec!["imageUrl"]))
        );

        let relative = ImageRequest {
            image_url: Some("banner.png".to_string()),
        };
        assert!(matches!(
            relative.validate(),
            Err(ValidationError::InvalidImageUrl(_))
        ));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = TemplateRecord::new(full_request().validate().unwrap());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["imageUrl"], "http://x/y.png");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("image_url").is_none());
        assert_eq!(record.footer, "Bye");
    }

    #[test]
    fn test_parse_record_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_record_id("not-a-uuid"),
            Err(ValidationError::InvalidId(_))
        ));
    }

    #[test]
    fn test_starter_fields_are_complete() {
        let starter = TemplateFields::starter();
        assert!(!starter.title.is_empty());
        assert!(starter.image_url.starts_with("https://"));
        assert!(starter.footer.contains("All rights reserved"));
    }
}
