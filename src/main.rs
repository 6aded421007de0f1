//! Entry point for the link shortener.
//!
//! # Usage
//!
//! ```bash
//! # Interactive console (default)
//! clck --config config.properties
//!
//! # HTTP service
//! clck serve
//! ```

use clck::cli::Session;
use clck::config::{self, Config, DEFAULT_CONFIG_PATH};
use clck::infrastructure::opener::SystemBrowser;
use clck::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Link shortener with click limits and lifetimes.
#[derive(Parser)]
#[command(name = "clck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the limits file
    #[arg(short, long, env = "CLCK_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console session
    Repl,

    /// Serve the HTTP API and redirects
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Repl);

    let config = match config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    // The console keeps quiet unless asked; the server logs at the configured level.
    let default_level = match command {
        Commands::Repl if std::env::var("RUST_LOG").is_err() => "warn",
        _ => config.log_level.as_str(),
    };
    init_tracing(&config, default_level);
    config.print_summary();

    match command {
        Commands::Repl => {
            let state = AppState::new(
                config.policy(),
                &config.base_url,
                Arc::new(SystemBrowser::new()),
            );
            Session::new(state, io::stdout()).run(io::stdin().lock())
        }
        Commands::Serve => clck::server::run(config).await,
    }
}

fn init_tracing(config: &Config, level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
