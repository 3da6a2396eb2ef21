// Fills a chosen URL template with search parameter values

use tracing::warn;

use super::parser::PlaceholderScanner;
use crate::domain::params::SearchParams;

/// Substitute `params` into `template`.
///
/// Each parameter replaces the first `{name}` or `{name?}` token. Optional
/// placeholders left over afterwards are removed; required ones are left
/// verbatim.
pub fn substitute(template: &str, params: &SearchParams) -> String {
    let mut url = template.to_string();

    for (name, value) in params.iter() {
        let required = format!("{{{}}}", name);
        let optional = format!("{{{}?}}", name);

        let position = match (url.find(&required), url.find(&optional)) {
            (Some(r), Some(o)) if o < r => Some((o, optional.len())),
            (Some(r), _) => Some((r, required.len())),
            (None, Some(o)) => Some((o, optional.len())),
            (None, None) => None,
        };

        if let Some((start, len)) = position {
            url.replace_range(start..start + len, &value.to_string());
        }
    }

    let url = strip_optional_placeholders(&url);

    let residual: Vec<&str> = PlaceholderScanner::scan(&url).map(|p| p.name).collect();
    if !residual.is_empty() {
        warn!(template, ?residual, "required placeholders left unfilled");
    }

    url
}

/// Remove every `{...?}` token
pub fn strip_optional_placeholders(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    let mut last = 0;

    for placeholder in PlaceholderScanner::scan(url).filter(|p| p.is_optional) {
        result.push_str(&url[last..placeholder.start]);
        last = placeholder.end;
    }
    result.push_str(&url[last..]);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::ParamValue;

    #[test]
    fn test_optional_parameters_are_filled_and_stripped() {
        let params = SearchParams::new().with("A", 1).with("b", 2);
        assert_eq!(
            substitute("A={A}&b={b?}&c={c?}&d={d?}", &params),
            "A=1&b=2&c=&d="
        );
    }

    #[test]
    fn test_unmatched_params_are_ignored() {
        let params = SearchParams::new().with("q", "ice").with("unused", "x");
        assert_eq!(substitute("http://x/?q={q}", &params), "http://x/?q=ice");
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let params = SearchParams::new().with("a", "1");
        assert_eq!(substitute("{a}/{a}/{a?}", &params), "1/{a}/");
    }

    #[test]
    fn test_optional_token_before_required_is_filled_first() {
        let params = SearchParams::new().with("a", "1");
        assert_eq!(substitute("{a?}-{a}", &params), "1-{a}");
    }

    #[test]
    fn test_missing_required_placeholder_passes_through() {
        let params = SearchParams::new();
        assert_eq!(substitute("q={q}&p={p?}", &params), "q={q}&p=");
    }

    #[test]
    fn test_null_value_substitutes_empty() {
        let params = SearchParams::new().with("q", ParamValue::Null);
        assert_eq!(substitute("q={q}", &params), "q=");
    }

    #[test]
    fn test_strip_does_not_span_required_placeholders() {
        assert_eq!(strip_optional_placeholders("{a}&{b?}"), "{a}&");
    }

    #[test]
    fn test_satisfied_template_has_no_residual_placeholder() {
        let template = "http://x/{geo:box}/{q}?start={startIndex?}&n={count?}";
        let params = SearchParams::new()
            .with("geo:box", "1,2,3,4")
            .with("q", "snow")
            .with("count", 25);

        let url = substitute(template, &params);
        assert_eq!(url, "http://x/1,2,3,4/snow?start=&n=25");
        assert_eq!(PlaceholderScanner::scan(&url).count(), 0);
    }
}
