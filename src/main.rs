//! Claims API server.
//!
//! Serves `GET /` and `GET /health` for the status client. Configuration comes
//! from an optional TOML file plus environment overrides (`BACKEND_HOST`,
//! `BACKEND_PORT`, `LOG_LEVEL`, `ENABLE_DEBUG_LOGS`).

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use claims_status::config::load_server_config;
use claims_status::http::HttpServer;
use claims_status::lifecycle::Shutdown;
use claims_status::observability::logging;

#[derive(Parser)]
#[command(name = "claims-status")]
#[command(about = "Claims automation API server", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_server_config(args.config.as_deref())?;

    logging::init(config.logging.resolved_level());

    tracing::info!(
        component = "main",
        reason = "Startup",
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;

    // Only OS signals stop the server; the coordinator lives for the process.
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config.server);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!(component = "main", reason = "Shutdown", "Shutdown complete");
    Ok(())
}
