use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ============================================================================
// Context menu model and trigger messages
// ============================================================================

pub const SAVE_ITEM_ID: &str = "saveForm";
pub const FILL_PARENT_ID: &str = "fillForm";
pub const NO_PRESETS_ID: &str = "noPresets";
pub const PRESET_ITEM_PREFIX: &str = "preset-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MenuLayout {
    /// Presets listed under a "Fill form with preset" parent
    #[default]
    Nested,
    /// Presets listed next to the save item at root level
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub enabled: bool,
}

impl MenuItem {
    fn new(id: &str, title: &str, parent_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            parent_id: parent_id.map(str::to_string),
            enabled: true,
        }
    }

    fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Build the context menu for the given preset names. Only the list of names
/// is needed, so either layout renders from the same store contents.
pub fn build_menu(preset_names: &[String], layout: MenuLayout) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::new(SAVE_ITEM_ID, "Save form as preset", None)];

    match layout {
        MenuLayout::Nested => {
            items.push(MenuItem::new(FILL_PARENT_ID, "Fill form with preset", None));
            if preset_names.is_empty() {
                items.push(
                    MenuItem::new(NO_PRESETS_ID, "No presets saved", Some(FILL_PARENT_ID))
                        .disabled(),
                );
            }
            for name in preset_names {
                items.push(MenuItem::new(
                    &preset_item_id(name),
                    name,
                    Some(FILL_PARENT_ID),
                ));
            }
        }
        MenuLayout::Flat => {
            if preset_names.is_empty() {
                items.push(MenuItem::new(NO_PRESETS_ID, "No presets saved", None).disabled());
            }
            for name in preset_names {
                items.push(MenuItem::new(
                    &preset_item_id(name),
                    &format!("Fill: {}", name),
                    None,
                ));
            }
        }
    }

    items
}

pub fn preset_item_id(name: &str) -> String {
    format!("{}{}", PRESET_ITEM_PREFIX, name)
}

/// Message delivered to the page context (or back to the menu owner).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Trigger {
    SaveForm,
    FillForm {
        #[serde(rename = "presetName")]
        preset_name: String,
    },
    /// Stored presets changed; menus should be rebuilt
    PresetSaved,
}

impl Trigger {
    /// Map a clicked menu item to the message it sends. Structural items
    /// (the fill parent, the empty-state placeholder) send nothing.
    pub fn from_menu_item(id: &str) -> Option<Trigger> {
        if id == SAVE_ITEM_ID {
            return Some(Trigger::SaveForm);
        }
        id.strip_prefix(PRESET_ITEM_PREFIX)
            .map(|name| Trigger::FillForm {
                preset_name: name.to_string(),
            })
    }
}

pub fn format_menu(items: &[MenuItem]) -> String {
    let mut out = String::new();
    for item in items {
        let indent = if item.parent_id.is_some() { "    " } else { "" };
        let state = if item.enabled { "" } else { " (disabled)" };
        out.push_str(&format!("{}{}{}  [{}]\n", indent, item.title, state, item.id));
    }
    out
}
