//! beacond - Beacon aggregation gateway daemon
//!
//! Answers "does variant V exist?" by fanning queries out to the GA4GH
//! beacons listed in a JSON configuration file.
//!
//! Usage:
//!   beacond [OPTIONS] [beacons.json]
//!
//! Options:
//!   --listen <addr>  Address to serve on (default 0.0.0.0:8089)

use std::net::SocketAddr;

use anyhow::Context;
use beacon_api::{create_router, AppState};
use beacon_core::AdapterConfig;
use beacon_gateway::Beaconizer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG: &str = "beacons.json";
const DEFAULT_LISTEN: &str = "0.0.0.0:8089";

/// Parsed command-line arguments
struct Args {
    /// Beacon list file (JSON)
    config_path: Option<String>,
    /// Listen address
    listen: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args {
        config_path: None,
        listen: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--listen" | "-l" => {
                if i + 1 < args.len() {
                    result.listen = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    tracing::error!("Missing argument for --listen");
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = beacon list file
                result.config_path = Some(arg.to_string());
                i += 1;
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"beacond - Beacon aggregation gateway daemon

Usage: beacond [OPTIONS] [beacons.json]

Options:
  -l, --listen <addr>  Address to serve on (default {DEFAULT_LISTEN})
  -h, --help           Print this help message

Examples:
  # Run with ./beacons.json
  beacond

  # Run with an explicit beacon list on another port
  beacond --listen 127.0.0.1:9090 /etc/beaconizer/beacons.json
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "beacond=info,beacon_api=info,beacon_gateway=info,beacon_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting beacond (beacon aggregation gateway)");

    let args = parse_args();
    let config_path = args.config_path.unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let json = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read beacon list from {config_path}"))?;
    let configs = AdapterConfig::load_from_str(&json)
        .with_context(|| format!("Invalid beacon list in {config_path}"))?;

    for config in &configs {
        tracing::info!(
            beacon = %config.name,
            url = %config.url,
            variant = ?config.variant,
            "Registered beacon"
        );
    }
    tracing::info!(beacons = configs.len(), "Beacon list loaded");

    let state = AppState::new(Beaconizer::new(configs));
    let router = create_router(state);

    let addr: SocketAddr = args
        .listen
        .as_deref()
        .unwrap_or(DEFAULT_LISTEN)
        .parse()
        .context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "beacond listening");
    axum::serve(listener, router).await?;

    Ok(())
}
