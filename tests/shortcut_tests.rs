use form_presets::shortcut::shortcut::{GENERIC_KEY, KeyChord, key_token, normalize_label, parse_shortcut};

fn chord(ctrl: bool, alt: bool, shift: bool, meta: bool, key: &str) -> KeyChord {
    KeyChord {
        ctrl,
        alt,
        shift,
        meta,
        key: key.into(),
    }
}

#[test]
fn test_label_modifier_order() {
    assert_eq!(
        chord(true, true, true, true, "f").label(),
        Some("Ctrl+Alt+Shift+Meta+F".into())
    );
    assert_eq!(chord(false, false, true, false, "1").label(), Some("Shift+1".into()));
}

#[test]
fn test_label_requires_modifier() {
    assert_eq!(chord(false, false, false, false, "a").label(), None);
}

#[test]
fn test_label_ignores_bare_modifier_press() {
    assert_eq!(chord(true, false, false, false, "Control").label(), None);
    assert_eq!(chord(false, false, true, false, "Shift").label(), None);
}

#[test]
fn test_key_tokens() {
    assert_eq!(key_token("a"), "A");
    assert_eq!(key_token("7"), "7");
    assert_eq!(key_token("f5"), "F5");
    assert_eq!(key_token("F12"), "F12");
    assert_eq!(key_token(" "), "Space");
    assert_eq!(key_token("Escape"), "Esc");
    assert_eq!(key_token("ArrowLeft"), "ArrowLeft");
    assert_eq!(key_token("PageDown"), "PageDown");
    assert_eq!(key_token("F13"), GENERIC_KEY);
    assert_eq!(key_token("é"), GENERIC_KEY);
    assert_eq!(key_token("Insert"), GENERIC_KEY);
}

#[test]
fn test_parse_accepts_aliases_and_case() {
    let parsed = parse_shortcut("control + option + cmd + k").unwrap();
    assert_eq!(parsed, chord(true, true, false, true, "k"));
    assert_eq!(parsed.label(), Some("Ctrl+Alt+Meta+K".into()));
}

#[test]
fn test_parse_rejects_invalid_labels() {
    assert_eq!(parse_shortcut("K"), None);
    assert_eq!(parse_shortcut("Ctrl+A+B"), None);
    assert_eq!(parse_shortcut("Ctrl+"), None);
    assert_eq!(parse_shortcut("Ctrl+Shift"), None);
    assert_eq!(parse_shortcut(""), None);
}

#[test]
fn test_normalize_label_is_idempotent() {
    for label in ["Ctrl+Alt+F", "Shift+Esc", "Meta+Space", "Alt+F4", "Ctrl+ArrowUp"] {
        assert_eq!(normalize_label(label).as_deref(), Some(label));
    }
    assert_eq!(normalize_label("shift+escape").as_deref(), Some("Shift+Esc"));
    assert_eq!(normalize_label("alt+shift+pagedown").as_deref(), Some("Alt+Shift+PageDown"));
}
