use std::path::Path;

use tracing::{debug, warn};

use crate::cli::config::AppConfig;
use crate::dom::dom_model::{Document, NodeId};
use crate::dom::snapshot::{load_page, render_page, write_page};
use crate::error::{PresetError, Result};
use crate::report::console::{format_fill_report, format_preset_list, format_shortcut_list};
use crate::report::menu::{MenuLayout, build_menu, format_menu};
use crate::store::backend::PresetStore;
use crate::store::presets::{load_presets, load_shortcuts, preset_names};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;
use crate::workflow::confirm::{AutoConfirm, Confirmer, StdinConfirm};
use crate::workflow::handlers::{
    FillOutcome, SaveRequest, bind_shortcut, delete_preset, designated_form, fill_by_shortcut,
    fill_form, save_form, unbind_shortcut,
};

// ============================================================================
// save subcommand
// ============================================================================

/// How the form to save is designated on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    /// id of the element the user right-clicked
    Element(String),
    /// Zero-based position among the page's forms
    Index(usize),
    None,
}

impl FormTarget {
    pub fn from_args(target: Option<&str>, form: Option<usize>) -> Self {
        match (target, form) {
            (Some(id), _) => FormTarget::Element(id.to_string()),
            (None, Some(i)) => FormTarget::Index(i),
            (None, None) => FormTarget::None,
        }
    }

    /// Find the designated form in `doc`. Unknown ids and out-of-range
    /// indexes designate nothing.
    pub fn resolve(&self, doc: &Document) -> Option<NodeId> {
        match self {
            FormTarget::Element(id) => {
                let element = doc.by_id(id);
                if element.is_none() {
                    warn!(id = %id, "no element with this id in the page");
                }
                designated_form(doc, element)
            }
            FormTarget::Index(i) => doc.forms().get(*i).copied(),
            FormTarget::None => None,
        }
    }
}

pub fn cmd_save(
    store: &mut dyn PresetStore,
    config: &AppConfig,
    page: &str,
    target: &FormTarget,
    name: Option<&str>,
) -> Result<()> {
    let doc = load_page(Path::new(page))?;
    let form = target.resolve(&doc);

    let mut request = SaveRequest::new(form).with_fallback_label(&config.naming.fallback_label);
    if let Some(n) = name {
        request = request.named(n);
    }

    let saved = save_form(store, &doc, request)?;
    let verb = if saved.replaced { "Replaced" } else { "Saved" };
    println!(
        "{} preset \"{}\" ({} fields from {})",
        verb,
        saved.name,
        saved.preset.fields.len(),
        saved.preset.url
    );
    Ok(())
}

// ============================================================================
// fill subcommand
// ============================================================================

/// What selects the preset to fill from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillSource {
    Preset(String),
    Shortcut(String),
}

impl FillSource {
    fn label(&self) -> &str {
        match self {
            FillSource::Preset(name) | FillSource::Shortcut(name) => name,
        }
    }
}

pub fn cmd_fill(
    store: &dyn PresetStore,
    page: &str,
    source: &FillSource,
    assume_yes: bool,
    output: Option<&str>,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<()> {
    let mut doc = load_page(Path::new(page))?;
    let confirmer = confirmer_for(assume_yes);

    let outcome = match source {
        FillSource::Preset(name) => fill_form(store, &mut doc, name, confirmer.as_ref())?,
        FillSource::Shortcut(label) => {
            fill_by_shortcut(store, &mut doc, label, confirmer.as_ref())?
        }
    };

    let event = TraceEvent::now(source.label(), outcome.preset_url(), doc.url());
    match &outcome {
        FillOutcome::Declined { .. } => {
            tracer.log(&event.declined());
            eprintln!("Fill cancelled.");
            return Ok(());
        }
        FillOutcome::Filled { report, .. } => {
            tracer.log(&event.with_report(report));
            eprint!("{}", format_fill_report(source.label(), report, verbose > 0));
        }
    }

    match output {
        Some(path) => {
            write_page(&doc, Path::new(path))?;
            debug!(path, "filled snapshot written");
        }
        None => println!("{}", render_page(&doc)?),
    }
    Ok(())
}

// ============================================================================
// list / delete / menu subcommands
// ============================================================================

pub fn cmd_list(store: &dyn PresetStore) -> Result<()> {
    let presets = load_presets(store)?;
    print!("{}", format_preset_list(&presets));
    Ok(())
}

pub fn cmd_delete(store: &mut dyn PresetStore, name: &str, confirmer: &dyn Confirmer) -> Result<()> {
    let question = format!("Are you sure you want to delete the preset \"{}\"?", name);
    if !confirmer.confirm(&question) {
        eprintln!("Delete cancelled.");
        return Ok(());
    }

    if !delete_preset(store, name)? {
        return Err(PresetError::PresetNotFound(name.to_string()));
    }
    println!("Deleted preset \"{}\"", name);
    Ok(())
}

/// `layout` from the command line wins over the configured one.
pub fn cmd_menu(
    store: &dyn PresetStore,
    config: &AppConfig,
    layout: Option<MenuLayout>,
) -> Result<()> {
    let layout = layout.unwrap_or(config.menu.layout);
    let names = preset_names(store)?;
    print!("{}", format_menu(&build_menu(&names, layout)));
    Ok(())
}

// ============================================================================
// shortcut subcommands
// ============================================================================

pub fn cmd_shortcut_add(
    store: &mut dyn PresetStore,
    key: &str,
    preset: &str,
    confirmer: &dyn Confirmer,
) -> Result<()> {
    if !load_presets(store)?.contains_key(preset.trim()) {
        warn!(preset, "binding a shortcut to a preset that does not exist yet");
    }

    match bind_shortcut(store, key, preset, confirmer)? {
        Some(label) => println!("Bound {} to \"{}\"", label, preset.trim()),
        None => eprintln!("Kept the existing binding."),
    }
    Ok(())
}

pub fn cmd_shortcut_remove(store: &mut dyn PresetStore, key: &str) -> Result<()> {
    if !unbind_shortcut(store, key)? {
        return Err(PresetError::ShortcutNotFound(key.to_string()));
    }
    println!("Removed shortcut {}", key);
    Ok(())
}

pub fn cmd_shortcut_list(store: &dyn PresetStore) -> Result<()> {
    let shortcuts = load_shortcuts(store)?;
    print!("{}", format_shortcut_list(&shortcuts));
    Ok(())
}

/// Confirmation source for commands that take a `--yes` flag.
pub fn confirmer_for(assume_yes: bool) -> Box<dyn Confirmer> {
    if assume_yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    }
}
