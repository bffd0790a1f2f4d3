//! Pokedex - look up pokemon and keep a personal collection
//!
//! Main entry point: resolves configuration, wires the file store and the
//! PokeAPI catalog into a collection manager, and runs one command.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pokedex_core::{CollectionManager, HttpCatalog, PokedexConfig, Store};

mod collection_cli;

use collection_cli::CollectionCommand;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "pokedex",
    about = "Look up pokemon and keep a personal collection",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: CollectionCommand,

    /// Set log level (defaults to RUST_LOG, then warn)
    #[clap(long, global = true)]
    log_level: Option<LogLevel>,

    /// Use this configuration file instead of discovering one
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Override the data directory holding the collection
    #[clap(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the catalog base URL
    #[clap(long, global = true)]
    catalog_url: Option<String>,
}

impl Cli {
    /// Configuration from files and environment, with CLI flags applied last
    fn resolve_config(&self) -> Result<PokedexConfig> {
        let mut config = PokedexConfig::discover(self.config.as_deref())?;

        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if let Some(url) = &self.catalog_url {
            config.catalog.base_url = url.clone();
        }

        Ok(config)
    }
}

/// Initialize tracing
///
/// An explicit --log-level wins over RUST_LOG.
fn initialize_tracing(log_level: Option<&LogLevel>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level.to_filter_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Logs go to stderr so --json output stays clean
        .init();
}

fn build_manager(config: &PokedexConfig) -> Result<CollectionManager> {
    let storage = config
        .file_storage()
        .context("Failed to resolve the data directory")?;
    debug!("Using data directory {}", storage.dir().display());

    let catalog = HttpCatalog::new(&config.catalog)?;
    debug!("Using catalog {}", catalog.base_url());

    let store = Store::with_key(Box::new(storage), config.storage.key.clone());
    Ok(CollectionManager::new(store, Box::new(catalog)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(cli.log_level.as_ref());

    let config = cli.resolve_config()?;
    let manager = build_manager(&config)?;

    let mut stdout = std::io::stdout();
    cli.command.execute(&manager, &mut stdout).await
}
