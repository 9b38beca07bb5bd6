use tracing::{debug, warn};

use crate::dom::dom_model::{Document, NodeId};
use crate::form::field_model::{FieldKind, FieldMap, FieldRecord, FieldValue, capturable_fields};
use crate::form::identity::identify;

/// Record the current value of every capturable field in `form`.
///
/// A form without capturable fields yields an empty map. Two fields with the
/// same identity collapse into one entry holding the later field's value.
pub fn capture(doc: &Document, form: NodeId) -> FieldMap {
    let mut fields = FieldMap::new();

    for node in capturable_fields(doc, form) {
        let name = doc.attr(node, "name").unwrap_or_default().to_string();
        let record = match FieldKind::of(doc, node) {
            FieldKind::ButtonLike => continue,
            FieldKind::Checkable => FieldRecord {
                field_type: doc.input_type(node),
                value: FieldValue::Checked(doc.checked(node)),
                name,
            },
            FieldKind::Select => FieldRecord {
                field_type: "select".to_string(),
                value: FieldValue::Text(doc.value(node)),
                name,
            },
            FieldKind::MultiSelect => FieldRecord {
                field_type: "select-multiple".to_string(),
                value: FieldValue::List(doc.selected_values(node)),
                name,
            },
            FieldKind::TextLike => FieldRecord {
                field_type: doc.input_type(node),
                value: FieldValue::Text(doc.value(node)),
                name,
            },
        };

        let key = identify(doc, node).key();
        if fields.insert(key.clone(), record).is_some() {
            warn!(identity = %key, "field identity collision, keeping the later field");
        }
    }

    debug!(count = fields.len(), "captured form fields");
    fields
}
