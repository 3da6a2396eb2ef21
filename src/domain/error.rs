// Errors raised while building or resolving a description

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptionError {
    /// The document failed the structural check at construction
    #[error("not an OpenSearch description document: {0}")]
    Validation(String),

    /// The document declares no usable URL templates
    #[error("description document declares no URL templates")]
    NoTemplates,

    /// Templates exist but none fits the request
    #[error(
        "no URL template serves '{content_type}' with parameters [{}] (missing: [{}])",
        .supplied.join(", "),
        .missing.join(", ")
    )]
    NoCandidate {
        content_type: String,
        supplied: Vec<String>,
        /// Required placeholders absent from the params, across the
        /// templates whose content type matched
        missing: Vec<String>,
    },
}
