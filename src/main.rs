use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::config::Config;
use roster::store::{HttpPersonStore, MemoryPersonStore, PersonStore};
use roster::ui::runtime;

/// Terminal person-record manager.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Collection endpoint URL, overriding the config file.
    #[arg(long)]
    server_url: Option<String>,

    /// Keep records in memory instead of talking to a server.
    #[arg(long)]
    offline: bool,

    /// Write logs to this file (the terminal itself is the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.server_url {
        config.server.base_url = url;
        config.validate()?;
    }

    let store: Arc<dyn PersonStore> = if cli.offline {
        Arc::new(MemoryPersonStore::new())
    } else {
        Arc::new(HttpPersonStore::new(&config.server))
    };

    runtime::run(config, store).context("UI loop failed")
}
