//! tempo - keep note-value tempo fields in sync from the terminal
//!
//! Run with: cargo run -- [--table subdivision] [convert quarter-note 120]

mod app;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};

use app::TempoApp;
use tempo_sync::{io::config::TableConfig, FieldSet, NoteValueTable, TableVariant, TempoSync};

#[derive(Parser, Debug)]
#[command(name = "tempo", version, about = "Convert a tempo between note values")]
struct Cli {
    /// Built-in table to start with (base, subdivision)
    #[arg(long, global = true, default_value = "base")]
    table: String,

    /// JSON file with an extra table; it is selected first when given
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every field after setting one of them
    Convert {
        /// Field to set, e.g. quarter-note
        key: String,
        /// Beats per minute for that field
        #[arg(allow_hyphen_values = true)]
        bpm: String,
    },
    /// Print the entries of the selected table
    List,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Stderr shares the terminal with the UI, so stay quiet there unless asked
    let default_filter = if cli.command.is_some() { "warn" } else { "off" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let variant = TableVariant::from_name(&cli.table)
        .ok_or_else(|| eyre!("unknown table '{}' (expected base or subdivision)", cli.table))?;

    let custom = match &cli.config {
        Some(path) => Some(
            TableConfig::load(path)
                .and_then(|config| config.build())
                .wrap_err_with(|| format!("failed to load {}", path.display()))?,
        ),
        None => None,
    };

    match cli.command {
        Some(Command::Convert { key, bpm }) => {
            let table = custom.unwrap_or_else(|| variant.table());
            convert(table, &key, &bpm)
        }
        Some(Command::List) => {
            let table = custom.unwrap_or_else(|| variant.table());
            list(&table);
            Ok(())
        }
        None => {
            let mut app = TempoApp::new();
            if let Some(table) = custom {
                app = app.table(table);
            }
            // Built-ins follow, starting from the requested one
            let mut next = variant;
            for _ in TableVariant::ALL {
                app = app.table(next.table());
                next = next.next();
            }
            app.bpm(120.0).run()
        }
    }
}

fn convert(table: NoteValueTable, key: &str, bpm: &str) -> EyreResult<()> {
    let mut sync = TempoSync::new(table, FieldSet::new());
    sync.presenter_mut().set_text(key, bpm.trim());
    let conversion = sync.on_input(key, bpm)?;

    let table = sync.table();
    println!("=== {} ===", table.name());
    println!("Pulse: {} notes per minute", conversion.pulse());
    println!();
    for (entry, field) in table.entries().iter().zip(sync.presenter().fields()) {
        let marker = if entry.id == conversion.edited() { "*" } else { " " };
        println!(
            "{} {:<28} {:>12}   (x{})",
            marker, entry.id, field.text, entry.ratio
        );
    }
    Ok(())
}

fn list(table: &NoteValueTable) {
    println!(
        "=== {} ({} decimal places) ===",
        table.name(),
        table.precision()
    );
    for entry in table.entries() {
        println!("  {:<28} {}", entry.id, entry.ratio);
    }
}
