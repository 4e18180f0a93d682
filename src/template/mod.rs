//! Email template system.
//!
//! This module provides:
//! - Template and image record types with request validation
//! - Placeholder substitution ({{title}}, {{imageUrl}}, {{content}}, {{footer}})
//!
//! # Example
//!
//! ```ignore
//! let fields = TemplateRequest {
//!     title: Some("Hi".to_string()),
//!     content: Some("Body".to_string()),
//!     image_url: Some("http://x/y.png".to_string()),
//!     footer: Some("Bye".to_string()),
//! }
//! .validate()?;
//!
//! let html = render("<h1>{{title}}</h1><p>{{content}}</p>", &fields);
//! assert_eq!(html, "<h1>Hi</h1><p>Body</p>");
//! ```

mod render;
mod types;

pub use render::{
    missing_placeholders, render, render_with, SubstitutionMode, CONTENT_TOKEN, FOOTER_TOKEN,
    IMAGE_URL_TOKEN, PLACEHOLDER_TOKENS, TITLE_TOKEN,
};
pub use types::{
    parse_record_id, ImageRecord, ImageRequest, SaveResponse, TemplateFields,
    TemplateListResponse, TemplateRecord, TemplateRequest, ValidationError, ValidationResult,
};
