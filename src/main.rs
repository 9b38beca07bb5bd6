use std::path::Path;

use clap::Parser;
use form_presets::cli::commands::{
    FillSource, FormTarget, cmd_delete, cmd_fill, cmd_list, cmd_menu, cmd_save, cmd_shortcut_add,
    cmd_shortcut_list, cmd_shortcut_remove, confirmer_for,
};
use form_presets::cli::config::{Cli, Commands, ShortcutCommand, load_config, resolve_store_path};
use form_presets::store::backend::JsonFileStore;
use form_presets::trace::logger::TraceLogger;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// warn by default, -v info, -vv debug, -vvv trace. `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> form_presets::Result<()> {
    let config = load_config(cli.config.as_deref());

    // Resolve store path: CLI > config > default
    let mut store = JsonFileStore::new(resolve_store_path(cli.store.as_deref(), &config));

    match cli.command {
        Commands::Save {
            page,
            target,
            form,
            name,
        } => {
            let target = FormTarget::from_args(target.as_deref(), form);
            cmd_save(&mut store, &config, &page, &target, name.as_deref())?;
        }
        Commands::Fill {
            page,
            preset,
            shortcut,
            yes,
            output,
        } => {
            let source = match (preset, shortcut) {
                (Some(name), _) => FillSource::Preset(name),
                (None, Some(label)) => FillSource::Shortcut(label),
                (None, None) => unreachable!("clap requires --preset or --shortcut"),
            };
            let tracer = match &config.trace.path {
                Some(path) => TraceLogger::new(Path::new(path)),
                None => TraceLogger::disabled(),
            };
            cmd_fill(
                &store,
                &page,
                &source,
                yes,
                output.as_deref(),
                &tracer,
                cli.verbose,
            )?;
        }
        Commands::List => cmd_list(&store)?,
        Commands::Delete { name, yes } => {
            cmd_delete(&mut store, &name, confirmer_for(yes).as_ref())?;
        }
        Commands::Shortcut { action } => match action {
            ShortcutCommand::Add { key, preset, yes } => {
                cmd_shortcut_add(&mut store, &key, &preset, confirmer_for(yes).as_ref())?;
            }
            ShortcutCommand::Remove { key } => cmd_shortcut_remove(&mut store, &key)?,
            ShortcutCommand::List => cmd_shortcut_list(&store)?,
        },
        Commands::Menu { layout } => cmd_menu(&store, &config, layout)?,
    }

    Ok(())
}
