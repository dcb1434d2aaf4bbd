use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use ssu::model::{DEFAULT_CACHE_FILE, STEAM_APP_LIST_URL, Settings};

use crate::Commands;

const NOTES: &str = "\
Notes:
    - Your steam user folder is in Steam/userdata/<user_id>.
    - Sorting doesn't have an output argument because it's done in-place.
    - For merging, the compressed screenshots folder is expected to be the output of the backup
      command, and the uncompressed screenshots folder is expected to be the output of the sort
      command.";

#[derive(Parser)]
#[command(name = "ssu", version)]
#[command(about = "Steam Screenshot Utils", long_about = None)]
#[command(after_long_help = NOTES)]
pub(crate) struct Cli {
    /// Appid -> name cache file
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CACHE_FILE)]
    cache_file: PathBuf,

    /// Steam app list endpoint
    #[arg(long, global = true, value_name = "URL", default_value = STEAM_APP_LIST_URL)]
    catalog_url: String,

    /// Emit per-app results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More diagnostics (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Fewer diagnostics
    #[arg(short, long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        Cli::command()
            .print_long_help()
            .context("print usage")?;
        return Ok(());
    };

    let settings = Settings {
        cache_file: cli.cache_file,
        catalog_url: cli.catalog_url,
    };
    crate::cli_exec::handle_command(command, &settings, cli.json)
}

fn init_tracing(verbose: u8, quiet: u8) {
    // Default INFO so cache and fallback notes are visible.
    let level = match i16::from(verbose) - i16::from(quiet) {
        ..=-2 => Level::ERROR,
        -1 => Level::WARN,
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .without_time()
        .compact()
        .finish();

    // Ignore error if already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
