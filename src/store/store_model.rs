use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::form::field_model::FieldMap;

/// Storage key holding every saved preset.
pub const PRESETS_KEY: &str = "formPresets";

/// Storage key holding shortcut label → preset name bindings.
pub const SHORTCUTS_KEY: &str = "formShortcuts";

/// A named capture of one form: its field records plus the page it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub url: String,
    #[serde(rename = "formData", alias = "fields")]
    pub fields: FieldMap,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl Preset {
    pub fn new(url: &str, fields: FieldMap, saved_at: DateTime<Utc>) -> Self {
        Self {
            url: url.to_string(),
            fields,
            saved_at,
        }
    }
}

/// Presets keyed by their user-chosen name.
pub type PresetMap = IndexMap<String, Preset>;

/// Shortcut label → preset name. Nothing checks that the preset still exists.
pub type ShortcutMap = IndexMap<String, String>;
