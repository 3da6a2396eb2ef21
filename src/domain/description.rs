// A validated OpenSearch description document

use std::sync::OnceLock;

use super::error::DescriptionError;
use super::extractor;
use super::params::SearchParams;
use super::selector;
use super::template::{substitute, TemplateRecord};

/// Namespace every OpenSearch 1.1 description refers to
pub const OPENSEARCH_NAMESPACE: &str = "http://a9.com/-/spec/opensearch/1.1/";

/// An OpenSearch description document, validated once and then read-only.
///
/// The URL templates are extracted on first use and cached for the life of
/// the value, so a `Description` can be shared across threads and resolved
/// concurrently.
#[derive(Debug)]
pub struct Description {
    document: String,
    templates: OnceLock<Option<Vec<TemplateRecord>>>,
}

impl Description {
    pub fn new(document: impl Into<String>) -> Result<Self, DescriptionError> {
        let document = document.into();
        validate(&document)?;

        Ok(Self {
            document,
            templates: OnceLock::new(),
        })
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// The advertised templates, or `None` when the document has none
    pub fn templates(&self) -> Option<&[TemplateRecord]> {
        self.templates
            .get_or_init(|| extractor::extract(&self.document))
            .as_deref()
    }

    /// Pick the best template for the request and fill it in.
    ///
    /// Content type matching takes priority over parameters. Parameters
    /// that no placeholder refers to are ignored.
    pub fn resolve(
        &self,
        params: &SearchParams,
        content_type: &str,
    ) -> Result<String, DescriptionError> {
        let templates = self.templates().ok_or(DescriptionError::NoTemplates)?;
        let template = selector::select(templates, content_type, params)?;
        Ok(substitute(&template.template, params))
    }
}

impl std::str::FromStr for Description {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Minimal structural check: the document must mention the OpenSearch 1.1
/// namespace somewhere.
pub fn validate(document: &str) -> Result<(), DescriptionError> {
    if document.trim().is_empty() {
        return Err(DescriptionError::Validation("document is empty".to_string()));
    }

    if !document.contains(OPENSEARCH_NAMESPACE) {
        return Err(DescriptionError::Validation(format!(
            "missing namespace {}",
            OPENSEARCH_NAMESPACE
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const OSDD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OpenSearchDescription xmlns="http://a9.com/-/spec/opensearch/1.1/">
  <ShortName>Data search</ShortName>
  <Url type="application/opensearchdescription+xml" rel="self" template="http://example.com/osdd.xml"/>
  <Url type="application/atom+xml" template="http://example.com/atom?q={searchTerms}&amp;n={count?}"/>
  <Url type="application/atom+xml" template="http://example.com/atom?q={searchTerms}&amp;bbox={geo:box}&amp;n={count?}"/>
  <Url type="text/html" template="http://example.com/html?q={searchTerms}"/>
</OpenSearchDescription>"#;

    #[test]
    fn test_rejects_document_without_namespace() {
        let err = Description::new("<OpenSearchDescription/>").unwrap_err();
        assert!(matches!(err, DescriptionError::Validation(_)));
    }

    #[test]
    fn test_rejects_empty_document() {
        assert!(matches!(
            Description::new("   "),
            Err(DescriptionError::Validation(_))
        ));
    }

    #[test]
    fn test_accepts_bare_namespace_marker() {
        let description = Description::new(OPENSEARCH_NAMESPACE).unwrap();
        assert_eq!(description.templates(), None);
    }

    #[test]
    fn test_resolve_picks_content_type_then_params() {
        let description = Description::new(OSDD).unwrap();

        let params = SearchParams::new().with("searchTerms", "ice");
        assert_eq!(
            description.resolve(&params, "application/atom+xml").unwrap(),
            "http://example.com/atom?q=ice&n="
        );

        let params = params.with("geo:box", "-180,-90,180,90").with("count", 10);
        assert_eq!(
            description.resolve(&params, "application/atom+xml").unwrap(),
            "http://example.com/atom?q=ice&bbox=-180,-90,180,90&n=10"
        );

        assert_eq!(
            description.resolve(&params, "text/html").unwrap(),
            "http://example.com/html?q=ice"
        );
    }

    #[test]
    fn test_resolve_without_templates() {
        let xml = format!(
            r#"<OpenSearchDescription xmlns="{}"><Url rel="self" template="http://x"/></OpenSearchDescription>"#,
            OPENSEARCH_NAMESPACE
        );
        let description = Description::new(xml).unwrap();

        assert_eq!(
            description.resolve(&SearchParams::new(), "*/*"),
            Err(DescriptionError::NoTemplates)
        );
    }

    #[test]
    fn test_resolve_without_candidate() {
        let description = Description::new(OSDD).unwrap();
        let err = description
            .resolve(&SearchParams::new(), "application/atom+xml")
            .unwrap_err();

        match err {
            DescriptionError::NoCandidate { content_type, missing, .. } => {
                assert_eq!(content_type, "application/atom+xml");
                assert_eq!(missing, vec!["geo:box".to_string(), "searchTerms".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_templates_are_extracted_once() {
        let description = Description::new(OSDD).unwrap();
        let first = description.templates().unwrap().as_ptr();
        let second = description.templates().unwrap().as_ptr();
        assert_eq!(first, second);
        assert_eq!(description.templates().unwrap().len(), 3);
    }

    #[test]
    fn test_concurrent_resolve() {
        let description = Arc::new(Description::new(OSDD).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let description = Arc::clone(&description);
                std::thread::spawn(move || {
                    let params = SearchParams::new().with("searchTerms", i);
                    description.resolve(&params, "text/html").unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("http://example.com/html?q={}", i));
        }
    }
}
