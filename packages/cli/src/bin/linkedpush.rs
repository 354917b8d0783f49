use clap::{Parser, Subcommand};
use colored::*;
use std::process;

use linkedpush_cli::{init_tracing, lazy_state, run_server};
use linkedpush_config::AppConfig;

#[derive(Parser)]
#[command(name = "linkedpush")]
#[command(about = "Republish tagged GitHub commits as LinkedIn posts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook and OAuth server
    Serve {
        /// Override the PORT environment variable
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the LinkedIn authorization URL
    AuthUrl,
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;

    match command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.override_port(port)?;
            }
            run_server(config).await
        }
        Commands::AuthUrl => {
            let state = lazy_state(&config)?;
            println!("{}", state.oauth.begin_authorization());
            Ok(())
        }
    }
}
