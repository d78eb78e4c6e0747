//! Mortgage Desk Server
//!
//! Run with: cargo run --bin mortgage-desk -- --data deals.csv
//!
//! # Configuration
//!
//! Precedence, highest first: command-line flags, environment variables,
//! config file, built-in defaults. See `mortgage-desk-cli config` for a
//! commented config file.

use anyhow::Context;
use clap::Parser;
use mortgage_desk::api::{serve, AppState};
use mortgage_desk::config::Config;
use mortgage_desk::deals::DealTable;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "mortgage-desk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mortgage approval analytics dashboard server")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deal table CSV, overrides [data] path
    #[arg(short, long)]
    data: Option<String>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory with the built dashboard UI
    #[arg(long)]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = mortgage_desk::logging::with_bootstrap(|| match &args.config {
        Some(path) => Config::load_with_env(path),
        None => Ok(Config::load_default()),
    })?;
    apply_args(&mut config, args);

    mortgage_desk::logging::init(&config.logging);

    tracing::info!("Starting Mortgage Desk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Deal table: {}", config.data.path);

    let table = DealTable::load(&config.data.path, &config.data.columns)
        .with_context(|| format!("failed to load deal table from {}", config.data.path))?;

    if table.is_empty() {
        tracing::warn!("Deal table is empty; readiness probe will fail");
    }

    let state = AppState::from_config(Arc::new(table), &config);
    let api_config = Arc::clone(&state.config);

    serve(state, &api_config).await?;

    tracing::info!("Mortgage Desk stopped");
    Ok(())
}

fn apply_args(config: &mut Config, args: Args) {
    if let Some(data) = args.data {
        config.data.path = data;
    }
    if let Some(host) = args.host {
        config.api.host = host;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.api.static_dir = Some(dir);
    }
}
