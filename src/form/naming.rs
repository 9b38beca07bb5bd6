use chrono::{DateTime, Local};

use crate::dom::dom_model::{Document, NodeId};

pub const DEFAULT_FALLBACK_LABEL: &str = "Preset";

/// Suggest a human-readable name for a preset captured from `form`.
pub fn suggest_name(doc: &Document, form: NodeId) -> String {
    suggest_name_at(doc, form, Local::now(), DEFAULT_FALLBACK_LABEL)
}

/// Name suggestion with an explicit clock and fallback label.
///
/// First non-empty trimmed text wins:
/// 1. a heading inside the form
/// 2. a heading under the form's parent that is not part of another form
/// 3. the document title
/// 4. `"<fallback_label> <local timestamp>"`
pub fn suggest_name_at(
    doc: &Document,
    form: NodeId,
    now: DateTime<Local>,
    fallback_label: &str,
) -> String {
    let inner = doc.headings(form);
    if let Some(text) = first_heading_text(doc, &inner) {
        return text;
    }

    if let Some(parent) = doc.parent_element(form) {
        let siblings: Vec<NodeId> = doc
            .headings(parent)
            .into_iter()
            .filter(|h| match doc.closest_form(*h) {
                Some(owner) => owner == form,
                None => true,
            })
            .collect();
        if let Some(text) = first_heading_text(doc, &siblings) {
            return text;
        }
    }

    let title = doc.title().trim();
    if !title.is_empty() {
        return title.to_string();
    }

    format!("{} {}", fallback_label, now.format("%Y-%m-%d %H:%M:%S"))
}

fn first_heading_text(doc: &Document, headings: &[NodeId]) -> Option<String> {
    headings
        .iter()
        .map(|h| doc.text_content(*h).trim().to_string())
        .find(|text| !text.is_empty())
}
