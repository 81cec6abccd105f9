use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use claims_status::config::load_config;
use claims_status::observability::{LogLevel, Logger};
use claims_status::status::bench::{self, BenchOptions};
use claims_status::status::{StatusDisplay, StatusProbe};

#[derive(Parser)]
#[command(name = "status-cli")]
#[command(about = "Backend connectivity client for the claims API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides config and API_URL).
    #[arg(short = 'u', long)]
    api_url: Option<String>,

    /// Minimum log level: debug, info, warn or error.
    #[arg(short, long)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the backend once and show the status page (default)
    Status,
    /// Query the backend health endpoint
    Health,
    /// Measure API latency and throughput
    Bench {
        /// Number of requests to send.
        #[arg(short = 'n', long, default_value_t = 100)]
        requests: usize,

        /// Maximum requests in flight.
        #[arg(short = 'c', long, default_value_t = 10)]
        concurrency: usize,

        /// Unmeasured requests sent before each run.
        #[arg(short, long, default_value_t = 10)]
        warmup: usize,

        /// Path to request; repeat to benchmark several endpoints.
        #[arg(short, long = "path", default_values = ["/", "/health"])]
        paths: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.status.api_url = url;
    }

    let level = cli.log_level.unwrap_or_else(|| config.logging.resolved_level());
    let logger = Arc::new(Logger::console(level));
    let probe = StatusProbe::new(&config.status.api_url);

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            let mut display = StatusDisplay::new(logger, probe);
            display.mount().await;
            println!("{display}");
        }
        Commands::Health => match probe.fetch_health().await {
            Ok(health) => println!("Backend health: {}", health.status),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Bench {
            requests,
            concurrency,
            warmup,
            paths,
        } => {
            let client = reqwest::Client::new();
            let options = BenchOptions {
                requests,
                concurrency,
                warmup,
            };
            for path in paths {
                let results = bench::run(&client, &probe.url(&path), options).await;
                println!("{}\n", results.summary());
            }
        }
    }

    Ok(())
}
