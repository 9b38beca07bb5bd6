use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresetError {
    /// Save was triggered without a designated form
    #[error("No form selected. Right-click on a form element first.")]
    NoFormSelected,

    #[error("Preset \"{0}\" not found.")]
    PresetNotFound(String),

    #[error("Shortcut \"{0}\" is not bound to any preset.")]
    ShortcutNotFound(String),

    /// Label is malformed or has no modifier
    #[error("Invalid shortcut \"{0}\": use at least one of Ctrl, Alt, Shift, Meta plus a key")]
    InvalidShortcut(String),

    #[error("Preset name must not be empty")]
    EmptyPresetName,

    /// Page snapshot does not describe a usable document
    #[error("Invalid page snapshot: {0}")]
    Snapshot(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Store contents have an unexpected shape
    #[error("Preset store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PresetError>;
