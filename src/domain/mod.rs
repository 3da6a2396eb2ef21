// Resolving search requests against OpenSearch description documents
//
// Description::resolve runs extraction (cached), selection and
// substitution. Everything here is synchronous and free of I/O.

pub mod content_type;
mod description;
mod error;
pub mod extractor;
mod params;
mod query;
pub mod selector;
pub mod template;

pub use description::{validate, Description, OPENSEARCH_NAMESPACE};
pub use error::DescriptionError;
pub use params::{ParamValue, SearchParams};
pub use query::SearchQuery;
pub use template::{substitute, TemplateRecord};
