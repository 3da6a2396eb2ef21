// Chooses the best URL template for a request
//
// Content type and required placeholders are hard filters. Among the
// survivors the template using the most supplied parameters wins.

use tracing::debug;

use super::content_type;
use super::error::DescriptionError;
use super::params::SearchParams;
use super::template::{PlaceholderScanner, TemplateRecord};

/// Pick the template to fill for `content_type` and `params`.
///
/// Ties on the number of matched parameters go to the template declared
/// last.
pub fn select<'t>(
    templates: &'t [TemplateRecord],
    content_type: &str,
    params: &SearchParams,
) -> Result<&'t TemplateRecord, DescriptionError> {
    let by_type = filter_by_content_type(templates, content_type);
    let candidates = filter_by_required_params(&by_type, params);

    let best = candidates
        .iter()
        .enumerate()
        .max_by_key(|(index, t)| (count_matching_params(params, &t.template), *index))
        .map(|(_, t)| *t);

    match best {
        Some(template) => {
            debug!(
                content_type,
                template = %template.template,
                candidates = candidates.len(),
                "selected URL template"
            );
            Ok(template)
        }
        None => Err(no_candidate(&by_type, content_type, params)),
    }
}

pub fn filter_by_content_type<'t>(
    templates: &'t [TemplateRecord],
    content_type: &str,
) -> Vec<&'t TemplateRecord> {
    templates
        .iter()
        .filter(|t| content_type::matches(content_type, t.content_type.as_deref()))
        .collect()
}

pub fn filter_by_required_params<'t>(
    templates: &[&'t TemplateRecord],
    params: &SearchParams,
) -> Vec<&'t TemplateRecord> {
    templates
        .iter()
        .copied()
        .filter(|t| has_required_params(t, params))
        .collect()
}

/// Every required placeholder name is a key of `params`
pub fn has_required_params(template: &TemplateRecord, params: &SearchParams) -> bool {
    template.required_names().all(|name| params.contains_key(name))
}

/// Placeholders, required or optional, whose name has a defined value
pub fn count_matching_params(params: &SearchParams, template: &str) -> usize {
    PlaceholderScanner::scan(template)
        .filter(|p| params.is_defined(p.name))
        .count()
}

fn no_candidate(
    by_type: &[&TemplateRecord],
    content_type: &str,
    params: &SearchParams,
) -> DescriptionError {
    let mut missing: Vec<String> = by_type
        .iter()
        .flat_map(|t| t.required_names())
        .filter(|name| !params.contains_key(name))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing.dedup();

    DescriptionError::NoCandidate {
        content_type: content_type.to_string(),
        supplied: params.names().map(str::to_string).collect(),
        missing,
    }
}
