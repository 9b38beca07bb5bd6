use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dom::dom_model::{Document, NodeId};

// ============================================================================
// Saved field records
// ============================================================================

/// Saved value of one field. Checkable fields store their checked state,
/// multi-selects the ordered list of selected option values, everything else
/// a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checked(bool),
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: FieldValue,
    #[serde(default)]
    pub name: String,
}

/// Saved records keyed by the storage form of their field identity. Order is
/// capture order; name fallback takes the first record with a matching name.
pub type FieldMap = IndexMap<String, FieldRecord>;

// ============================================================================
// Field classification
// ============================================================================

/// How a live control is read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// button, submit, reset: never captured or filled
    ButtonLike,
    Checkable,
    Select,
    MultiSelect,
    TextLike,
}

impl FieldKind {
    pub fn of(doc: &Document, node: NodeId) -> FieldKind {
        match doc.input_type(node).as_str() {
            "button" | "submit" | "reset" => FieldKind::ButtonLike,
            "checkbox" | "radio" => FieldKind::Checkable,
            "select-one" => FieldKind::Select,
            "select-multiple" => FieldKind::MultiSelect,
            _ => FieldKind::TextLike,
        }
    }
}

/// Controls that take part in capture and fill, in document order.
pub fn capturable_fields(doc: &Document, scope: NodeId) -> Vec<NodeId> {
    doc.form_controls(scope)
        .into_iter()
        .filter(|n| FieldKind::of(doc, *n) != FieldKind::ButtonLike)
        .collect()
}

impl FieldRecord {
    pub fn is_checkable(&self) -> bool {
        self.field_type == "checkbox" || self.field_type == "radio"
    }

    pub fn is_select(&self) -> bool {
        self.field_type.starts_with("select")
    }

    pub fn is_text_like(&self) -> bool {
        !self.is_checkable() && !self.is_select() && matches!(self.value, FieldValue::Text(_))
    }

    /// Whether this record may fill a live field of `kind` and `live_type`.
    pub fn compatible_with(&self, kind: FieldKind, live_type: &str) -> bool {
        match kind {
            FieldKind::ButtonLike => false,
            FieldKind::Checkable => self.field_type == live_type,
            FieldKind::Select | FieldKind::MultiSelect => self.is_select(),
            FieldKind::TextLike => self.is_text_like(),
        }
    }
}
