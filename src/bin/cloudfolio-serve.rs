//! Cloudfolio Server Binary
//!
//! This binary serves the built portfolio site from assets embedded at
//! compile time, so the whole page ships as one executable.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:3000 or the saved config)
//! cloudfolio-serve
//!
//! # Specify host and port
//! cloudfolio-serve --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloudfolio::config::Config;
use cloudfolio::web;

/// Cloudfolio Server - delivers the built portfolio site
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration, then apply CLI overrides
    let mut config = Config::load().unwrap_or_default();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Start the server
    web::run_server(config).await
}
