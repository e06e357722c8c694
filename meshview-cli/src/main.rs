//! meshview: service-mesh metrics tables in the terminal.

mod commands;
mod paths;
mod render;
mod settings;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use commands::query::QueryArgs;
use commands::settings::SettingsArgs;
use commands::table::TableArgs;
use settings::{FileBackend, SettingsProvider};

#[derive(Debug, Parser)]
#[command(name = "meshview", version)]
#[command(about = "Sortable, filterable service-mesh metrics tables", long_about = None)]
struct Cli {
    /// Settings file to use instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a metrics snapshot as a table
    Table(TableArgs),
    /// Print the CLI command equivalent to a dashboard query
    Query(QueryArgs),
    /// Show or update the stored settings
    Settings(SettingsArgs),
}

/// Log to `<cache>/latest.log`. The terminal only carries command output.
fn init_logging(verbose: bool) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(file) = File::create(&path) else { return };
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = WriteLogger::init(level, Config::default(), file);
}

fn settings_provider(config: Option<PathBuf>) -> SettingsProvider {
    match config.or_else(paths::settings_file) {
        Some(path) => {
            let backend = FileBackend::new(path);
            info!("Using settings at {}", backend.path().display());
            SettingsProvider::new(backend)
        }
        None => {
            warn!("No config directory available, using default settings");
            SettingsProvider::detached()
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let provider = settings_provider(cli.config);
    let settings = provider.load().context("failed to load settings")?;

    match &cli.command {
        Command::Table(args) => commands::table::run(args, &settings),
        Command::Query(args) => commands::query::run(args, &settings),
        Command::Settings(args) => commands::settings::run(args, &provider, settings),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}
