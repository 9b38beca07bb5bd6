use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PresetError, Result};
use crate::store::backend::PresetStore;
use crate::store::store_model::{PRESETS_KEY, Preset, PresetMap, SHORTCUTS_KEY, ShortcutMap};

// ============================================================================
// Typed access to the two fixed storage keys
// ============================================================================

fn read_key<T: DeserializeOwned + Default>(store: &dyn PresetStore, key: &str) -> Result<T> {
    match store.get(key)? {
        Some(value) => serde_json::from_value(value).map_err(|e| PresetError::Json {
            context: format!("stored {key}"),
            source: e,
        }),
        None => Ok(T::default()),
    }
}

fn write_key<T: Serialize>(store: &mut dyn PresetStore, key: &str, value: &T) -> Result<()> {
    let value = serde_json::to_value(value).map_err(|e| PresetError::Json {
        context: format!("encoding {key}"),
        source: e,
    })?;
    store.set(key, value)
}

pub fn load_presets(store: &dyn PresetStore) -> Result<PresetMap> {
    read_key(store, PRESETS_KEY)
}

pub fn store_presets(store: &mut dyn PresetStore, presets: &PresetMap) -> Result<()> {
    write_key(store, PRESETS_KEY, presets)
}

pub fn load_shortcuts(store: &dyn PresetStore) -> Result<ShortcutMap> {
    read_key(store, SHORTCUTS_KEY)
}

pub fn store_shortcuts(store: &mut dyn PresetStore, shortcuts: &ShortcutMap) -> Result<()> {
    write_key(store, SHORTCUTS_KEY, shortcuts)
}

pub fn get_preset(store: &dyn PresetStore, name: &str) -> Result<Option<Preset>> {
    Ok(load_presets(store)?.shift_remove(name))
}

/// Insert or replace the preset called `name`. Returns true when an existing
/// preset was overwritten.
pub fn put_preset(store: &mut dyn PresetStore, name: &str, preset: Preset) -> Result<bool> {
    let mut presets = load_presets(store)?;
    let replaced = presets.insert(name.to_string(), preset).is_some();
    store_presets(store, &presets)?;
    debug!(preset = name, replaced, "preset stored");
    Ok(replaced)
}

/// Remove the preset called `name`. Shortcuts pointing at it are left alone.
pub fn remove_preset(store: &mut dyn PresetStore, name: &str) -> Result<bool> {
    let mut presets = load_presets(store)?;
    if presets.shift_remove(name).is_none() {
        return Ok(false);
    }
    store_presets(store, &presets)?;
    Ok(true)
}

/// Names of all stored presets in storage order.
pub fn preset_names(store: &dyn PresetStore) -> Result<Vec<String>> {
    Ok(load_presets(store)?.keys().cloned().collect())
}

pub fn resolve_shortcut(store: &dyn PresetStore, label: &str) -> Result<Option<String>> {
    Ok(load_shortcuts(store)?.shift_remove(label))
}
