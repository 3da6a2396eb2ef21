// Chainable query against one description

use std::sync::Arc;

use super::content_type;
use super::description::Description;
use super::error::DescriptionError;
use super::params::{ParamValue, SearchParams};

/// Search parameters and a desired content type for one service.
///
/// ```
/// use searchlight::domain::SearchQuery;
///
/// let xml = r#"<OpenSearchDescription xmlns="http://a9.com/-/spec/opensearch/1.1/">
///   <Url type="text/xml" template="http://example.com/?q={searchTerms}&amp;p={startPage?}"/>
/// </OpenSearchDescription>"#;
///
/// let mut query = SearchQuery::from_document(xml).unwrap();
/// query.set("searchTerms", "sea ice").set_content_type("text/xml");
/// assert_eq!(query.query_url().unwrap(), "http://example.com/?q=sea ice&p=");
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery {
    description: Arc<Description>,
    params: SearchParams,
    content_type: Option<String>,
}

impl SearchQuery {
    pub fn new(description: Arc<Description>) -> Self {
        Self {
            description,
            params: SearchParams::new(),
            content_type: None,
        }
    }

    pub fn from_document(document: &str) -> Result<Self, DescriptionError> {
        Ok(Self::new(Arc::new(Description::new(document)?)))
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.params.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// If the service has no template for this type, `query_url` fails
    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Resolve the URL to request. No content type means `*/*`.
    pub fn query_url(&self) -> Result<String, DescriptionError> {
        self.description.resolve(
            &self.params,
            self.content_type.as_deref().unwrap_or(content_type::ANY),
        )
    }
}
