use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use musea::config::{load_config, Config};
use musea::engine::AggregationEngine;
use musea::providers::{HarvardProvider, VamProvider};
use musea::server;

/// Aggregation server for searching artworks across museum collection APIs
#[derive(Parser, Debug)]
#[command(name = "musea")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Aggregates artwork search across museum collection APIs", long_about = None)]
struct Cli {
    /// Bind address override
    #[arg(long)]
    host: Option<String>,

    /// Listen port override
    #[arg(long, short)]
    port: Option<u16>,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (can be used multiple times: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("musea={default_level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config: Config = load_config(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if config.harvard.api_key.is_empty() {
        tracing::warn!("no Harvard API key configured; Harvard requests will be rejected upstream");
    }

    let harvard = Arc::new(HarvardProvider::new(
        config.harvard.base_url.clone(),
        config.harvard.api_key.clone(),
    ));
    let vam = Arc::new(VamProvider::new(config.vam.base_url.clone()));
    let engine = AggregationEngine::new(harvard, vam);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!(version = musea::VERSION, %addr, "starting musea");
    server::run(addr, engine).await?;

    Ok(())
}
