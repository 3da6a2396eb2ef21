// URL templates advertised by description documents
//
// Placeholders are `{name}` (required) or `{name?}` (optional). This is a
// narrower syntax than RFC 6570.

mod ast;
mod parser;
mod substitutor;

pub use ast::{Placeholder, TemplateRecord};
pub use parser::PlaceholderScanner;
pub use substitutor::{strip_optional_placeholders, substitute};
