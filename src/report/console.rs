use chrono::{DateTime, Local, TimeZone, Utc};

use crate::fill::fill_model::{FillAction, FillReport};
use crate::store::store_model::{PresetMap, ShortcutMap};

// ============================================================================
// Console listings: presets, shortcuts, fill summary
// ============================================================================

pub const NO_PRESETS: &str = "No form presets saved yet.\nUse `form-presets save` on a page to save one.";
pub const NO_SHORTCUTS: &str = "No shortcuts set yet.\nAdd one with `form-presets shortcut add`.";

/// `YYYY-MM-DD HH:MM` in the given zone.
pub fn format_saved_at<Tz: TimeZone>(saved_at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    saved_at
        .with_timezone(zone)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Presets sorted newest first, one per line: name and local save time.
///
/// ```text
/// Checkout details    2026-03-01 14:05
/// Login               2026-02-28 09:12
/// ```
pub fn format_preset_list(presets: &PresetMap) -> String {
    format_preset_list_in(presets, &Local)
}

pub fn format_preset_list_in<Tz: TimeZone>(presets: &PresetMap, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if presets.is_empty() {
        return format!("{}\n", NO_PRESETS);
    }

    let mut sorted: Vec<_> = presets.iter().collect();
    sorted.sort_by(|(_, a), (_, b)| b.saved_at.cmp(&a.saved_at));

    let width = sorted.iter().map(|(name, _)| name.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, preset) in sorted {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            name,
            format_saved_at(&preset.saved_at, zone),
            width = width
        ));
    }
    out
}

/// Shortcut bindings in storage order: `label  →  preset`.
pub fn format_shortcut_list(shortcuts: &ShortcutMap) -> String {
    if shortcuts.is_empty() {
        return format!("{}\n", NO_SHORTCUTS);
    }

    let width = shortcuts.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, preset) in shortcuts.iter() {
        out.push_str(&format!("{:<width$}  \u{2192}  {}\n", label, preset, width = width));
    }
    out
}

/// One-line summary, plus per-field detail when `verbose`.
pub fn format_fill_report(preset: &str, report: &FillReport, verbose: bool) -> String {
    let mut out = format!(
        "Form filled with preset \"{}\"! Filled {} of {} fields found.\n",
        preset, report.fields_filled, report.fields_found
    );

    if verbose {
        for outcome in &report.outcomes {
            let marker = match outcome.action {
                FillAction::Filled => "filled",
                FillAction::KeptExisting => "kept",
                FillAction::TypeMismatch => "mismatch",
                FillAction::Unchanged => "unchanged",
            };
            out.push_str(&format!("    [{}] {}\n", marker, outcome.identity));
        }
    }

    out
}
