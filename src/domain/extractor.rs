// Pulls URL template declarations out of a description document

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{debug, warn};

use super::template::TemplateRecord;

const SELF_RELATION: &str = "self";

/// Extract every `<Url>` declaration that is not `rel="self"`, in document
/// order.
///
/// Returns `None` when nothing survives. Declarations without a `template`
/// attribute are skipped. Element and attribute names are compared on their
/// local part, ignoring case. Parsing is lenient: unbalanced end tags are
/// tolerated, and a hard syntax error stops the scan keeping what was found.
pub fn extract(document: &str) -> Option<Vec<TemplateRecord>> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().check_end_names = false;

    let mut templates = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if let Some(record) = url_declaration(&e) {
                    templates.push(record);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!(
                    position = reader.buffer_position(),
                    error = %e,
                    "stopped reading description document"
                );
                break;
            }
            _ => {}
        }
    }

    debug!(count = templates.len(), "extracted URL templates");

    if templates.is_empty() {
        None
    } else {
        Some(templates)
    }
}

fn url_declaration(element: &BytesStart<'_>) -> Option<TemplateRecord> {
    if !element.local_name().as_ref().eq_ignore_ascii_case(b"url") {
        return None;
    }

    let mut rel = None;
    let mut content_type = None;
    let mut template = None;

    for attr in element.attributes().flatten() {
        let value = match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            // Bare `&` in a template is common; keep the text as written
            Err(_) => lenient_unescape(&String::from_utf8_lossy(&attr.value)),
        };
        let key = attr.key.local_name();
        let key = key.as_ref();

        if key.eq_ignore_ascii_case(b"rel") {
            rel = Some(value.clone());
        } else if key.eq_ignore_ascii_case(b"type") {
            content_type = Some(value.clone());
        } else if key.eq_ignore_ascii_case(b"template") {
            template = Some(value.clone());
        }
    }

    if rel.as_deref() == Some(SELF_RELATION) {
        return None;
    }

    match template {
        Some(template) => Some(TemplateRecord {
            content_type,
            template,
        }),
        None => {
            warn!(?content_type, "skipping <Url> declaration without a template");
            None
        }
    }
}

/// Decode the predefined entities and leave any other `&` untouched
fn lenient_unescape(raw: &str) -> String {
    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
