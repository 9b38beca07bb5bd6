use chrono::{DateTime, Local, Utc};
use tracing::{info, warn};

use crate::dom::dom_model::{Document, NodeId};
use crate::error::{PresetError, Result};
use crate::fill::fill::fill;
use crate::fill::fill_model::FillReport;
use crate::form::capture::capture;
use crate::form::naming::{DEFAULT_FALLBACK_LABEL, suggest_name_at};
use crate::shortcut::shortcut::normalize_label;
use crate::store::backend::PresetStore;
use crate::store::presets::{
    get_preset, load_shortcuts, put_preset, remove_preset, resolve_shortcut, store_shortcuts,
};
use crate::store::store_model::Preset;
use crate::workflow::confirm::Confirmer;

// ============================================================================
// Save
// ============================================================================

/// Everything a save needs. The designated form comes from the triggering
/// event (the element the user right-clicked), never from ambient state.
#[derive(Debug, Clone)]
pub struct SaveRequest<'a> {
    pub form: Option<NodeId>,
    pub name: Option<&'a str>,
    pub fallback_label: &'a str,
    pub now: DateTime<Local>,
}

impl<'a> SaveRequest<'a> {
    pub fn new(form: Option<NodeId>) -> Self {
        Self {
            form,
            name: None,
            fallback_label: DEFAULT_FALLBACK_LABEL,
            now: Local::now(),
        }
    }

    pub fn named(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_fallback_label(mut self, label: &'a str) -> Self {
        self.fallback_label = label;
        self
    }

    pub fn at(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedPreset {
    pub name: String,
    pub preset: Preset,
    /// An existing preset with the same name was overwritten
    pub replaced: bool,
}

/// Resolve the form a context-menu click landed in: the nearest enclosing
/// form of `target`, if any.
pub fn designated_form(doc: &Document, target: Option<NodeId>) -> Option<NodeId> {
    target.and_then(|t| doc.closest_form(t))
}

/// Capture the designated form and store it as a preset.
///
/// Without an explicit name the suggestion from [`suggest_name_at`] is used.
pub fn save_form(
    store: &mut dyn PresetStore,
    doc: &Document,
    request: SaveRequest<'_>,
) -> Result<SavedPreset> {
    let form = request.form.ok_or(PresetError::NoFormSelected)?;

    let name = match request.name {
        Some(n) => n.trim().to_string(),
        None => suggest_name_at(doc, form, request.now, request.fallback_label),
    };
    if name.is_empty() {
        return Err(PresetError::EmptyPresetName);
    }

    let fields = capture(doc, form);
    if fields.is_empty() {
        warn!(preset = %name, "form has no capturable fields, saving an empty preset");
    }

    let preset = Preset::new(doc.url(), fields, request.now.with_timezone(&Utc));
    let replaced = put_preset(store, &name, preset.clone())?;
    info!(preset = %name, fields = preset.fields.len(), replaced, "preset saved");

    Ok(SavedPreset {
        name,
        preset,
        replaced,
    })
}

// ============================================================================
// Fill
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FillOutcome {
    Filled {
        preset_url: String,
        report: FillReport,
    },
    /// The preset came from another page and the user declined to continue
    Declined { preset_url: String },
}

impl FillOutcome {
    pub fn preset_url(&self) -> &str {
        match self {
            FillOutcome::Filled { preset_url, .. } | FillOutcome::Declined { preset_url } => {
                preset_url
            }
        }
    }

    pub fn report(&self) -> Option<&FillReport> {
        match self {
            FillOutcome::Filled { report, .. } => Some(report),
            FillOutcome::Declined { .. } => None,
        }
    }
}

/// Message shown before filling a preset captured on a different page.
pub fn cross_page_message(preset_url: &str) -> String {
    format!(
        "This preset was saved on {}. Do you still want to try to fill the current form?",
        preset_url
    )
}

/// Fill `doc` from the preset called `name`.
pub fn fill_form(
    store: &dyn PresetStore,
    doc: &mut Document,
    name: &str,
    confirmer: &dyn Confirmer,
) -> Result<FillOutcome> {
    let preset =
        get_preset(store, name)?.ok_or_else(|| PresetError::PresetNotFound(name.to_string()))?;

    if preset.url != doc.url() && !confirmer.confirm(&cross_page_message(&preset.url)) {
        info!(preset = name, "cross-page fill declined");
        return Ok(FillOutcome::Declined {
            preset_url: preset.url,
        });
    }

    let report = fill(doc, &preset);
    info!(
        preset = name,
        found = report.fields_found,
        filled = report.fields_filled,
        "form filled"
    );
    Ok(FillOutcome::Filled {
        preset_url: preset.url,
        report,
    })
}

/// Fill through a shortcut label. A label bound to a deleted preset surfaces
/// as [`PresetError::PresetNotFound`].
pub fn fill_by_shortcut(
    store: &dyn PresetStore,
    doc: &mut Document,
    label: &str,
    confirmer: &dyn Confirmer,
) -> Result<FillOutcome> {
    let label = normalize_label(label).unwrap_or_else(|| label.trim().to_string());
    let preset_name =
        resolve_shortcut(store, &label)?.ok_or_else(|| PresetError::ShortcutNotFound(label))?;
    fill_form(store, doc, &preset_name, confirmer)
}

// ============================================================================
// Preset and shortcut management
// ============================================================================

/// Delete a preset. Shortcuts bound to it are left dangling.
pub fn delete_preset(store: &mut dyn PresetStore, name: &str) -> Result<bool> {
    let removed = remove_preset(store, name)?;
    if removed {
        info!(preset = name, "preset deleted");
    }
    Ok(removed)
}

/// Bind `label` to `preset`, asking before replacing an existing binding.
/// Returns the canonical label, or `None` when the user kept the old binding.
pub fn bind_shortcut(
    store: &mut dyn PresetStore,
    label: &str,
    preset: &str,
    confirmer: &dyn Confirmer,
) -> Result<Option<String>> {
    let label =
        normalize_label(label).ok_or_else(|| PresetError::InvalidShortcut(label.to_string()))?;
    let preset = preset.trim();
    if preset.is_empty() {
        return Err(PresetError::EmptyPresetName);
    }

    let mut shortcuts = load_shortcuts(store)?;
    if let Some(current) = shortcuts.get(&label) {
        let question = format!(
            "Shortcut \"{}\" is already assigned to \"{}\". Do you want to overwrite it?",
            label, current
        );
        if !confirmer.confirm(&question) {
            return Ok(None);
        }
    }

    shortcuts.insert(label.clone(), preset.to_string());
    store_shortcuts(store, &shortcuts)?;
    info!(shortcut = %label, preset, "shortcut bound");
    Ok(Some(label))
}

pub fn unbind_shortcut(store: &mut dyn PresetStore, label: &str) -> Result<bool> {
    let label = normalize_label(label).unwrap_or_else(|| label.trim().to_string());
    let mut shortcuts = load_shortcuts(store)?;
    if shortcuts.shift_remove(&label).is_none() {
        return Ok(false);
    }
    store_shortcuts(store, &shortcuts)?;
    info!(shortcut = %label, "shortcut removed");
    Ok(true)
}
