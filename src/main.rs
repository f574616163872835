//! Popdash API Server
//!
//! Run with: cargo run --bin popdash
//!
//! Loads the population CSV once, then serves the dashboard views over
//! HTTP until Ctrl+C or SIGTERM.
//!
//! # Configuration
//!
//! `--config <FILE>` or the first of `~/.config/popdash/config.toml`,
//! `/etc/popdash/config.toml`, `./config.toml`. Environment variables
//! (`POPDASH_*`) override file settings; `RUST_LOG` overrides the log level.

use anyhow::Context;
use clap::Parser;
use popdash::api::{serve, AppState};
use popdash::config::Config;
use popdash::dataset::load_dataset;
use popdash::logging::init_logging;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "popdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "US Population Dashboard API server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Population CSV (overrides the configured path)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Port to listen on (overrides the configured port)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.or_else(Config::find_default);
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    if let Some(data) = args.data {
        config.data.path = data;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting Popdash API server v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    // Load the dataset once; every request shares it read-only
    tracing::info!("Data file: {:?}", config.data.path);
    let dataset = load_dataset(&config.data.path)
        .with_context(|| format!("Failed to load population data from {:?}", config.data.path))?;

    if let Some(year) = config.dashboard.default_year {
        if !dataset.contains_year(year) {
            tracing::warn!(
                "Configured default year {} is not in the dataset, using {}",
                year,
                dataset.first_year()
            );
        }
    }

    let state = AppState::new(Arc::new(dataset), config.dashboard.clone(), config.api.clone());

    serve(state, &config.api).await?;

    tracing::info!("Popdash API server stopped");
    Ok(())
}
