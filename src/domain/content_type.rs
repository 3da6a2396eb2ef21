// Content type matching between a requested and an advertised type
//
// Plain string comparison on `type/subtype`. No case folding and no
// parameter handling, so `text/xml;charset=utf-8` differs from `text/xml`.

pub const ANY: &str = "*/*";
const WILDCARD: &str = "*";

/// Whether a template advertising `advertised` can serve `requested`.
///
/// `*/*` accepts anything, including templates without a content type. A
/// `*` subtype on either side matches any subtype of the same type, and a
/// requested `*` type matches any type with the same subtype.
pub fn matches(requested: &str, advertised: Option<&str>) -> bool {
    if requested == ANY {
        return true;
    }

    let Some(advertised) = advertised else {
        return false;
    };

    if requested == advertised {
        return true;
    }

    let (req_type, req_subtype) = split(requested);
    let (adv_type, adv_subtype) = split(advertised);

    if req_type == adv_type && (req_subtype == Some(WILDCARD) || adv_subtype == Some(WILDCARD)) {
        return true;
    }

    req_type == WILDCARD && req_subtype == adv_subtype
}

fn split(content_type: &str) -> (&str, Option<&str>) {
    let mut parts = content_type.split('/');
    let main = parts.next().unwrap_or_default();
    (main, parts.next())
}
