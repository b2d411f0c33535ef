//! TURBOMARK AI Engine
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ tokio listener ─▶ axum Router ─▶ handler ─▶ marketing::engine
//!                          │               │
//!                          │               ├─ request id, trace span
//!                          │               ├─ CORS, body limit, timeout
//!                          │               └─ route metrics
//!     Client Response      │
//!     ◀────────────────────┘ JSON payload (+ x-request-id)
//! ```
//!
//! Configuration comes from an optional TOML file, the `PORT` environment
//! variable, and `--port`, in increasing precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use turbomark_engine::config::resolve_config;
use turbomark_engine::observability::{logging, metrics};
use turbomark_engine::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "turbomark-engine", version)]
#[command(about = "TURBOMARK AI Engine: marketing automation HTTP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides the config file and PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.port)?;

    logging::init_logging(&config.observability);

    tracing::info!("turbomark-engine v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        cors_enabled = config.cors.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse::<SocketAddr>()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
