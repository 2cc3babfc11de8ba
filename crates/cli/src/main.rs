mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use entityinfo_core::ServiceConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entityinfo")]
#[command(about = "Backend-for-frontend aggregating project file statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
        /// Overrides HOST
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Create the metrics and manifest tables if missing
    Migrate,
    /// Print file statistics for one project as JSON
    Statistics {
        project_geid: String,
        /// Window start, unix seconds
        #[arg(long)]
        start_date: i64,
        /// Window end, unix seconds
        #[arg(long)]
        end_date: i64,
        /// Restrict counts to one operator
        #[arg(long)]
        operator: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let mut config = ServiceConfig::from_env()?;

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            commands::serve::run(&config).await?;
        },
        Commands::Migrate => commands::migrate::run(&config).await?,
        Commands::Statistics { project_geid, start_date, end_date, operator } => {
            commands::statistics::run(&config, &project_geid, start_date, end_date, operator.as_deref())
                .await?;
        },
    }

    Ok(())
}
