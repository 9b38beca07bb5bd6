use tracing::{debug, trace};

use crate::dom::dom_model::{Document, EventKind, NodeId};
use crate::fill::fill_model::{FieldMatch, FillAction, FillReport};
use crate::form::field_model::{FieldKind, FieldRecord, FieldValue, capturable_fields};
use crate::form::identity::identify;
use crate::store::store_model::Preset;

/// Apply `preset` to every matching field of `doc`.
///
/// Each live field is paired by exact identity first, then by the first saved
/// record with the same `name`. Fields that already hold a value are never
/// overwritten. The engine does not look at URLs; confirming a fill on a
/// different page is the caller's job.
pub fn fill(doc: &mut Document, preset: &Preset) -> FillReport {
    let mut report = FillReport::default();

    for node in capturable_fields(doc, doc.root()) {
        let kind = FieldKind::of(doc, node);
        let live_type = doc.input_type(node);
        let existing = has_existing_value(doc, node, kind);
        let key = identify(doc, node).key();

        if let Some(saved) = preset.fields.get(&key) {
            let action = if existing {
                FillAction::KeptExisting
            } else {
                apply(doc, node, kind, saved)
            };
            trace!(identity = %key, ?action, "identity match");
            report.record(key, FieldMatch::Identity, action);
            continue;
        }

        let Some(name) = doc.non_empty_attr(node, "name").map(str::to_string) else {
            continue;
        };
        let Some((saved_key, saved)) = preset.fields.iter().find(|(_, r)| r.name == name) else {
            continue;
        };

        let action = if existing {
            FillAction::KeptExisting
        } else if !saved.compatible_with(kind, &live_type) {
            FillAction::TypeMismatch
        } else {
            apply(doc, node, kind, saved)
        };
        trace!(identity = %key, saved = %saved_key, ?action, "name match");
        report.record(
            key,
            FieldMatch::Name {
                saved_key: saved_key.to_string(),
            },
            action,
        );
    }

    debug!(
        found = report.fields_found,
        filled = report.fields_filled,
        "fill complete"
    );
    report
}

/// Whether the field already carries user or page supplied data. A radio
/// also counts as answered when another radio of its group is checked, since
/// checking it would clear that choice.
pub fn has_existing_value(doc: &Document, node: NodeId, kind: FieldKind) -> bool {
    match kind {
        FieldKind::ButtonLike => false,
        FieldKind::Checkable => {
            doc.checked(node) || doc.radio_group(node).into_iter().any(|r| doc.checked(r))
        }
        FieldKind::Select | FieldKind::MultiSelect => {
            doc.selected_index(node).is_some_and(|i| i > 0) && !doc.value(node).trim().is_empty()
        }
        FieldKind::TextLike => !doc.value(node).trim().is_empty(),
    }
}

fn apply(doc: &mut Document, node: NodeId, kind: FieldKind, saved: &FieldRecord) -> FillAction {
    match (kind, &saved.value) {
        (FieldKind::Checkable, FieldValue::Checked(checked)) => {
            doc.set_checked(node, *checked);
            // Unchecking is not a fill from the user's point of view.
            if doc.checked(node) {
                doc.dispatch(node, EventKind::Change);
                FillAction::Filled
            } else {
                FillAction::Unchanged
            }
        }
        (FieldKind::Select, FieldValue::Text(value)) => {
            doc.select_option_value(node, value);
            doc.dispatch(node, EventKind::Change);
            FillAction::Filled
        }
        (FieldKind::Select, FieldValue::List(values)) => {
            if let Some(first) = values.first() {
                doc.select_option_value(node, first);
            }
            doc.dispatch(node, EventKind::Change);
            FillAction::Filled
        }
        (FieldKind::MultiSelect, FieldValue::List(values)) => {
            doc.set_selected_values(node, values);
            doc.dispatch(node, EventKind::Change);
            FillAction::Filled
        }
        (FieldKind::MultiSelect, FieldValue::Text(value)) => {
            doc.set_selected_values(node, std::slice::from_ref(value));
            doc.dispatch(node, EventKind::Change);
            FillAction::Filled
        }
        (FieldKind::TextLike, FieldValue::Text(value)) => {
            doc.set_value(node, value);
            doc.dispatch(node, EventKind::Input);
            doc.dispatch(node, EventKind::Change);
            FillAction::Filled
        }
        _ => FillAction::TypeMismatch,
    }
}
