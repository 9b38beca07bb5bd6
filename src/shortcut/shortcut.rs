use serde::{Deserialize, Serialize};

// ============================================================================
// Shortcut labels: "Ctrl+Alt+F", "Shift+Meta+Esc", ...
// ============================================================================

const MODIFIER_KEYS: &[&str] = &["Control", "Alt", "Shift", "Meta"];

const NAMED_KEYS: &[(&str, &str)] = &[
    (" ", "Space"),
    ("Space", "Space"),
    ("ArrowUp", "ArrowUp"),
    ("ArrowDown", "ArrowDown"),
    ("ArrowLeft", "ArrowLeft"),
    ("ArrowRight", "ArrowRight"),
    ("Enter", "Enter"),
    ("Tab", "Tab"),
    ("Escape", "Esc"),
    ("Esc", "Esc"),
    ("Delete", "Delete"),
    ("Backspace", "Backspace"),
    ("Home", "Home"),
    ("End", "End"),
    ("PageUp", "PageUp"),
    ("PageDown", "PageDown"),
];

/// Placeholder token for keys without a dedicated name.
pub const GENERIC_KEY: &str = "Key";

/// A key press with its active modifiers. `key` is the key name as reported
/// by the keyboard event ("a", "F5", "Escape", " ").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyChord {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
    pub key: String,
}

impl KeyChord {
    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.shift || self.meta
    }

    /// Label for this chord, or `None` while only a modifier is held or when
    /// no modifier is active.
    pub fn label(&self) -> Option<String> {
        if MODIFIER_KEYS.contains(&self.key.as_str()) || !self.has_modifier() {
            return None;
        }

        let mut parts: Vec<String> = Vec::with_capacity(5);
        if self.ctrl {
            parts.push("Ctrl".into());
        }
        if self.alt {
            parts.push("Alt".into());
        }
        if self.shift {
            parts.push("Shift".into());
        }
        if self.meta {
            parts.push("Meta".into());
        }
        parts.push(key_token(&self.key));
        Some(parts.join("+"))
    }
}

/// Normalize a key name into its label token.
pub fn key_token(key: &str) -> String {
    if is_function_key(key) {
        return key.to_ascii_uppercase();
    }

    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return c.to_ascii_uppercase().to_string();
        }
        if c.is_ascii_digit() {
            return c.to_string();
        }
    }

    NAMED_KEYS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, token)| token.to_string())
        .unwrap_or_else(|| GENERIC_KEY.to_string())
}

fn is_function_key(key: &str) -> bool {
    let Some(rest) = key.strip_prefix('F').or_else(|| key.strip_prefix('f')) else {
        return false;
    };
    matches!(rest.parse::<u8>(), Ok(1..=12)) && !rest.starts_with('0')
}

/// Parse a user-typed label such as `ctrl+alt+f` into a chord.
///
/// Modifiers are matched case-insensitively (`Control`/`Cmd` are accepted as
/// aliases) and exactly one non-modifier key must follow them.
pub fn parse_shortcut(label: &str) -> Option<KeyChord> {
    let mut chord = KeyChord::default();
    let mut key: Option<&str> = None;

    for part in label.split('+').map(str::trim) {
        if part.is_empty() {
            return None;
        }
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => chord.ctrl = true,
            "alt" | "option" => chord.alt = true,
            "shift" => chord.shift = true,
            "meta" | "cmd" | "command" | "super" => chord.meta = true,
            _ => {
                if key.is_some() {
                    return None;
                }
                key = Some(part);
            }
        }
    }

    let key = key?;
    chord.key = canonical_key_name(key);
    chord.has_modifier().then_some(chord)
}

/// Map a typed key name back to the name a keyboard event would report, so
/// that `parse_shortcut(l).label()` round-trips canonical labels.
fn canonical_key_name(typed: &str) -> String {
    NAMED_KEYS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(typed))
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| typed.to_string())
}

/// Canonical form of a user-supplied label, `None` when it is not valid.
pub fn normalize_label(label: &str) -> Option<String> {
    parse_shortcut(label).and_then(|chord| chord.label())
}
