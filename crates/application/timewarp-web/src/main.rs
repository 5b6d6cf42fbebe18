//! Timewarp analysis server
//!
//! ## Usage
//!
//! ```bash
//! timewarp            # Serve on http://127.0.0.1:8050
//! timewarp --debug    # Debug logging, page rebuilt on every request
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use timewarp_web::{serve, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "timewarp")]
#[command(about = "Timewarp multiplier analysis - chart, table and observations in one page")]
#[command(version)]
struct Cli {
    /// Debug logging and re-render the page on every request
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::new(cli.debug);

    let default_filter = if config.debug {
        "timewarp_web=debug,timewarp_core=debug,tower_http=debug"
    } else {
        "timewarp_web=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = Arc::new(AppState::load(config.debug).context("failed to build analysis page")?);

    serve(state, &config.addr)
        .await
        .with_context(|| format!("server on {} stopped", config.addr))?;

    Ok(())
}
