//! Save the values of an HTML form as a named preset and fill them back into
//! the same or a similar form later.
//!
//! Pages are handled as [`dom::dom_model::Document`]s loaded from JSON page
//! snapshots. [`form::capture::capture`] records a form's fields keyed by
//! [`form::identity::FieldIdentity`]; [`fill::fill::fill`] pairs a preset's
//! records with the live fields of a document and writes values into fields
//! that are still empty.

pub mod cli;
pub mod dom;
pub mod error;
pub mod fill;
pub mod form;
pub mod report;
pub mod shortcut;
pub mod store;
pub mod trace;
pub mod workflow;

pub use dom::dom_model::{Document, NodeId};
pub use error::{PresetError, Result};
pub use fill::fill_model::FillReport;
pub use form::field_model::{FieldRecord, FieldValue};
pub use form::identity::FieldIdentity;
pub use store::store_model::Preset;
