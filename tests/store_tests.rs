use chrono::{TimeZone, Utc};
use form_presets::store::backend::{JsonFileStore, MemoryStore, PresetStore};
use form_presets::store::presets::{
    get_preset, load_presets, load_shortcuts, preset_names, put_preset, remove_preset,
    resolve_shortcut, store_shortcuts,
};
use form_presets::form::field_model::FieldMap;
use form_presets::store::store_model::{PRESETS_KEY, ShortcutMap};
use form_presets::{FieldRecord, FieldValue, Preset, PresetError};
use serde_json::json;
use tempfile::TempDir;

fn sample_preset(url: &str, value: &str) -> Preset {
    let mut fields = FieldMap::new();
    fields.insert(
        r#"name="email"type="email""#.to_string(),
        FieldRecord {
            field_type: "email".into(),
            value: FieldValue::Text(value.into()),
            name: "email".into(),
        },
    );
    Preset::new(url, fields, Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap())
}

// ============================================================================
// Backends
// ============================================================================

#[test]
fn test_memory_store_get_set_delete() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", json!({"x": 1})).unwrap();
    assert_eq!(store.get("k").unwrap(), Some(json!({"x": 1})));
    store.delete("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_json_file_store_missing_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nope.json"));
    assert_eq!(store.get(PRESETS_KEY).unwrap(), None);
    assert!(load_presets(&store).unwrap().is_empty());
}

#[test]
fn test_json_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let mut store = JsonFileStore::new(&path);
    put_preset(&mut store, "Login", sample_preset("https://a.example/login", "me@a")).unwrap();

    let reopened = JsonFileStore::new(&path);
    let loaded = get_preset(&reopened, "Login").unwrap().unwrap();
    assert_eq!(loaded, sample_preset("https://a.example/login", "me@a"));
}

#[test]
fn test_json_file_store_on_disk_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let mut store = JsonFileStore::new(&path);
    put_preset(&mut store, "Login", sample_preset("https://a.example/login", "me@a")).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let login = &raw["formPresets"]["Login"];
    assert_eq!(login["url"], "https://a.example/login");
    assert_eq!(login["savedAt"], "2026-02-03T04:05:06Z");
    assert_eq!(
        login["formData"][r#"name="email"type="email""#],
        json!({ "type": "email", "value": "me@a", "name": "email" })
    );
}

#[test]
fn test_json_file_store_rejects_non_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2]").unwrap();

    let err = JsonFileStore::new(&path).get(PRESETS_KEY).unwrap_err();
    assert!(matches!(err, PresetError::Store(_)));
}

#[test]
fn test_json_file_store_empty_file_reads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "  \n").unwrap();
    assert_eq!(JsonFileStore::new(&path).get(PRESETS_KEY).unwrap(), None);
}

// ============================================================================
// Preset and shortcut operations
// ============================================================================

#[test]
fn test_put_preset_reports_replacement_and_keeps_position() {
    let mut store = MemoryStore::new();
    assert!(!put_preset(&mut store, "A", sample_preset("u1", "1")).unwrap());
    assert!(!put_preset(&mut store, "B", sample_preset("u2", "2")).unwrap());
    assert!(put_preset(&mut store, "A", sample_preset("u3", "3")).unwrap());

    assert_eq!(preset_names(&store).unwrap(), vec!["A", "B"]);
    assert_eq!(get_preset(&store, "A").unwrap().unwrap().url, "u3");
}

#[test]
fn test_preset_and_field_order_survive_the_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let mut store = JsonFileStore::new(&path);

    let mut preset = sample_preset("u", "x");
    for key in ["zeta", "alpha", "mid"] {
        preset.fields.insert(
            key.to_string(),
            FieldRecord {
                field_type: "text".into(),
                value: FieldValue::Text(key.into()),
                name: key.into(),
            },
        );
    }
    for name in ["Zulu", "Alpha", "Mike"] {
        put_preset(&mut store, name, preset.clone()).unwrap();
    }
    assert!(remove_preset(&mut store, "Zulu").unwrap());
    put_preset(&mut store, "Zulu", preset.clone()).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(preset_names(&reopened).unwrap(), vec!["Alpha", "Mike", "Zulu"]);
    let loaded = get_preset(&reopened, "Mike").unwrap().unwrap();
    assert_eq!(
        loaded.fields.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![r#"name="email"type="email""#, "zeta", "alpha", "mid"]
    );
}

#[test]
fn test_remove_preset_keeps_order_of_the_rest() {
    let mut store = MemoryStore::new();
    for name in ["A", "B", "C"] {
        put_preset(&mut store, name, sample_preset("u", name)).unwrap();
    }
    assert!(remove_preset(&mut store, "A").unwrap());
    assert_eq!(preset_names(&store).unwrap(), vec!["B", "C"]);
}

#[test]
fn test_remove_preset() {
    let mut store = MemoryStore::new();
    put_preset(&mut store, "A", sample_preset("u", "1")).unwrap();
    assert!(remove_preset(&mut store, "A").unwrap());
    assert!(!remove_preset(&mut store, "A").unwrap());
    assert!(get_preset(&store, "A").unwrap().is_none());
}

#[test]
fn test_legacy_fields_key_is_accepted() {
    let mut store = MemoryStore::new();
    store
        .set(
            PRESETS_KEY,
            json!({
                "Old": {
                    "url": "u",
                    "fields": { "name=\"q\"type=\"text\"": { "type": "text", "value": "x" } },
                    "savedAt": "2025-01-01T00:00:00Z"
                }
            }),
        )
        .unwrap();

    let old = get_preset(&store, "Old").unwrap().unwrap();
    let record = old.fields.get(r#"name="q"type="text""#).unwrap();
    assert_eq!(record.value, FieldValue::Text("x".into()));
    assert_eq!(record.name, "");
}

#[test]
fn test_corrupt_presets_surface_as_json_error() {
    let mut store = MemoryStore::new();
    store.set(PRESETS_KEY, json!({"Bad": 5})).unwrap();
    assert!(matches!(load_presets(&store), Err(PresetError::Json { .. })));
}

#[test]
fn test_shortcuts_round_trip_and_resolve() {
    let mut store = MemoryStore::new();
    let mut shortcuts = ShortcutMap::new();
    shortcuts.insert("Ctrl+Shift+L".to_string(), "Login".to_string());
    store_shortcuts(&mut store, &shortcuts).unwrap();

    assert_eq!(load_shortcuts(&store).unwrap(), shortcuts);
    assert_eq!(resolve_shortcut(&store, "Ctrl+Shift+L").unwrap(), Some("Login".into()));
    assert_eq!(resolve_shortcut(&store, "Ctrl+K").unwrap(), None);
}
