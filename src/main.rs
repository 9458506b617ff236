//! Cartographer CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "cartographer")]
#[command(about = "Interactive dependency map of a codebase, with AI file summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (defaults to ./cartographer.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the visualization server, optionally preloaded with files or folders
    Serve {
        paths: Vec<PathBuf>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Use the offline summary instead of the AI provider
        #[arg(long)]
        offline: bool,
    },
    /// Analyze files or folders and print the graph
    Analyze {
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Print the full graph as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a single file
    Summarize {
        file: PathBuf,

        /// Skip the AI provider
        #[arg(long)]
        offline: bool,
    },
    /// Check that the AI provider answers
    CheckAi,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "cartographer={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
    let config = config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            paths,
            port,
            host,
            offline,
        } => {
            let mut server = config.server.clone();
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(host) = host {
                server.host = host;
            }
            commands::serve(&config, server.into(), paths, offline).await
        }
        Commands::Analyze { paths, json } => commands::analyze(paths, json).await,
        Commands::Summarize { file, offline } => {
            commands::summarize(&config, file, offline).await
        }
        Commands::CheckAi => commands::check_ai(&config).await,
        Commands::Version => {
            println!("Cartographer v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
