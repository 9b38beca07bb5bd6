use std::fmt;

use crate::dom::dom_model::{Document, NodeId};
use crate::form::field_model::capturable_fields;

/// Value-independent identity of a form field.
///
/// Compared structurally; the `Display` form is the key used in stored
/// presets, e.g. `name="email"id="mail"label="E-mail"type="email"`.
/// Parts are emitted in the fixed order name, id, label, type, index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldIdentity {
    pub name: Option<String>,
    pub id: Option<String>,
    pub label: Option<String>,
    pub field_type: String,
    pub index: Option<usize>,
}

impl FieldIdentity {
    /// Storage key for this identity.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "name=\"{name}\"")?;
        }
        if let Some(id) = &self.id {
            write!(f, "id=\"{id}\"")?;
        }
        if let Some(label) = &self.label {
            write!(f, "label=\"{label}\"")?;
        }
        write!(f, "type=\"{}\"", self.field_type)?;
        if let Some(index) = self.index {
            write!(f, "index={index}")?;
        }
        Ok(())
    }
}

/// Derive the identity of `field` from its static attributes.
///
/// The positional index is a last resort: it is only added when the field has
/// no name, no id and no `<label for>` element at all, and only for fields
/// inside a form.
pub fn identify(doc: &Document, field: NodeId) -> FieldIdentity {
    let name = doc.non_empty_attr(field, "name").map(str::to_string);
    let id = doc.non_empty_attr(field, "id").map(str::to_string);

    let label_node = id.as_deref().and_then(|id| doc.label_for(id));
    let label = label_node
        .map(|l| doc.text_content(l).trim().to_string())
        .filter(|text| !text.is_empty());

    let index = if name.is_none() && id.is_none() && label_node.is_none() {
        doc.closest_form(field).and_then(|form| {
            capturable_fields(doc, form)
                .iter()
                .position(|candidate| *candidate == field)
        })
    } else {
        None
    };

    FieldIdentity {
        name,
        id,
        label,
        field_type: doc.input_type(field),
        index,
    }
}
