// Types for advertised URL templates

use serde::Serialize;

use super::parser::PlaceholderScanner;

/// One URL template advertised by a description document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    /// `type/subtype`, or `None` when the document leaves it out
    pub content_type: Option<String>,
    pub template: String,
}

impl TemplateRecord {
    pub fn new(content_type: Option<&str>, template: &str) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            template: template.to_string(),
        }
    }

    /// All placeholders in declaration order
    pub fn placeholders(&self) -> Vec<Placeholder<'_>> {
        PlaceholderScanner::scan(&self.template).collect()
    }

    /// Names of the placeholders that must be supplied
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        PlaceholderScanner::scan(&self.template)
            .filter(|p| !p.is_optional)
            .map(|p| p.name)
    }
}

/// A `{name}` or `{name?}` token inside a URL template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Name with the braces and any trailing `?` removed
    pub name: &'a str,
    pub is_optional: bool,
    /// Byte range of the whole token, braces included
    pub start: usize,
    pub end: usize,
}

impl Placeholder<'_> {
    pub fn token<'t>(&self, template: &'t str) -> &'t str {
        &template[self.start..self.end]
    }
}
