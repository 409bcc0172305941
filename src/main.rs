use anyhow::Result;
use clap::{Parser, Subcommand};

/// cookiegate - cookie-based session authentication demo
#[derive(Parser)]
#[command(name = "cookiegate")]
#[command(about = "Cookie-based session authentication demo", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = cookiegate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize logging
    cookiegate::observability::init_observability(
        "cookiegate",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            tracing::info!("Starting cookiegate server...");
            cookiegate::server::serve(config, host, port).await
        }
    }
}
