//! Wildscribe CLI — the main entry point.
//!
//! Commands:
//! - `serve` — Start the HTTP API gateway
//! - `ask`   — Answer a single question on the command line

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "wildscribe",
    about = "Wildscribe — structured wildlife research answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API gateway
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Answer a single question and print the result
    Ask {
        /// The question to answer
        query: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask { query } => commands::ask::run(&query).await?,
    }

    Ok(())
}
