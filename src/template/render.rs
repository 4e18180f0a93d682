//! Placeholder substitution for email layouts

use serde::Deserialize;

use super::types::TemplateFields;

pub const TITLE_TOKEN: &str = "{{title}}";
pub const IMAGE_URL_TOKEN: &str = "{{imageUrl}}";
pub const CONTENT_TOKEN: &str = "{{content}}";
pub const FOOTER_TOKEN: &str = "{{footer}}";

/// Every placeholder a layout may contain
pub const PLACEHOLDER_TOKENS: [&str; 4] = [TITLE_TOKEN, IMAGE_URL_TOKEN, CONTENT_TOKEN, FOOTER_TOKEN];

/// Which occurrences of each token get replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SubstitutionMode {
    /// Only the first occurrence of each token
    #[default]
    #[serde(rename = "first")]
    FirstOccurrence,
    /// Every occurrence of each token
    #[serde(rename = "all")]
    AllOccurrences,
}

impl SubstitutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstitutionMode::FirstOccurrence => "first",
            SubstitutionMode::AllOccurrences => "all",
        }
    }
}

/// Render a layout replacing the first occurrence of each placeholder
pub fn render(layout: &str, fields: &TemplateFields) -> String {
    render_with(layout, fields, SubstitutionMode::FirstOccurrence)
}

/// Render a layout with the given substitution mode.
///
/// Token positions are located in the original layout and the output is
/// assembled in a single pass, so values containing placeholder text are
/// inserted verbatim and never substituted again. Tokens missing from the
/// layout are ignored.
pub fn render_with(layout: &str, fields: &TemplateFields, mode: SubstitutionMode) -> String {
    let replacements = [
        (TITLE_TOKEN, fields.title.as_str()),
        (IMAGE_URL_TOKEN, fields.image_url.as_str()),
        (CONTENT_TOKEN, fields.content.as_str()),
        (FOOTER_TOKEN, fields.footer.as_str()),
    ];

    // (start offset, token length, value)
    let mut spans: Vec<(usize, usize, &str)> = Vec::new();
    for (token, value) in replacements {
        match mode {
            SubstitutionMode::FirstOccurrence => {
                if let Some(start) = layout.find(token) {
                    spans.push((start, token.len(), value));
                }
            }
            SubstitutionMode::AllOccurrences => {
                spans.extend(
                    layout
                        .match_indices(token)
                        .map(|(start, _)| (start, token.len(), value)),
                );
            }
        }
    }

    // Distinct `{{name}}` tokens cannot overlap
    spans.sort_unstable_by_key(|&(start, _, _)| start);

    let capacity = layout.len() + spans.iter().map(|&(_, _, v)| v.len()).sum::<usize>();
    let mut output = String::with_capacity(capacity);
    let mut cursor = 0;

    for (start, len, value) in spans {
        output.push_str(&layout[cursor..start]);
        output.push_str(value);
        cursor = start + len;
    }
    output.push_str(&layout[cursor..]);

    output
}

/// Placeholder tokens that do not appear anywhere in the layout
pub fn missing_placeholders(layout: &str) -> Vec<&'static str> {
    PLACEHOLDER_TOKENS
        .iter()
        .copied()
        .filter(|token| !layout.contains(token))
        .collect()
}
