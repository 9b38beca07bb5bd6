use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::report::menu::MenuLayout;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-presets",
    version,
    about = "Save HTML form values as named presets and fill them back in"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Preset store file (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Path to config file (default: form-presets.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture a form from a page snapshot and save it as a preset
    Save {
        /// Page snapshot JSON file
        #[arg(long)]
        page: String,

        /// id of the element the user right-clicked; its enclosing form is saved
        #[arg(long, conflicts_with = "form")]
        target: Option<String>,

        /// Zero-based position of the form in the page
        #[arg(long)]
        form: Option<usize>,

        /// Preset name (default: suggested from headings or the page title)
        #[arg(long)]
        name: Option<String>,
    },

    /// Fill a page snapshot from a saved preset
    Fill {
        /// Page snapshot JSON file
        #[arg(long)]
        page: String,

        /// Preset name
        #[arg(long, conflicts_with = "shortcut", required_unless_present = "shortcut")]
        preset: Option<String>,

        /// Shortcut label bound to a preset, e.g. Ctrl+Alt+F
        #[arg(long)]
        shortcut: Option<String>,

        /// Fill without asking when the preset came from another page
        #[arg(short, long)]
        yes: bool,

        /// Where to write the filled snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List saved presets, newest first
    List,

    /// Delete a preset
    Delete {
        name: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage shortcut bindings
    Shortcut {
        #[command(subcommand)]
        action: ShortcutCommand,
    },

    /// Show the context menu built from the saved presets
    Menu {
        /// Menu layout (default: from config, else nested)
        #[arg(long, value_enum)]
        layout: Option<MenuLayout>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ShortcutCommand {
    /// Bind a shortcut label to a preset
    Add {
        /// Shortcut label, e.g. Ctrl+Shift+L
        #[arg(long)]
        key: String,

        /// Preset the shortcut fills
        #[arg(long)]
        preset: String,

        /// Overwrite an existing binding without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove a shortcut binding
    Remove { key: String },

    /// List shortcut bindings
    List,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-presets.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    /// JSONL file receiving one event per fill; tracing is off when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            fallback_label: default_fallback_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MenuConfig {
    #[serde(default)]
    pub layout: MenuLayout,
}

// Serde default helpers
fn default_store_path() -> String { "form-presets.json".to_string() }
fn default_fallback_label() -> String { crate::form::naming::DEFAULT_FALLBACK_LABEL.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-presets.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = config_path, error = %e, "malformed config, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the store path: CLI flag > config file > default.
pub fn resolve_store_path(cli_store: Option<&str>, config: &AppConfig) -> String {
    cli_store
        .map(str::to_string)
        .unwrap_or_else(|| config.store.path.clone())
}
