use clap::{Parser, Subcommand};

use dcfm_cli::commands;
use dcfm_service::config::{load_dotenv, LoggingConfig, StoreConfig};

#[derive(Parser)]
#[command(name = "dcfm")]
#[command(about = "Contact form manager: store setup and submission tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the submission table (idempotent)
    Activate(commands::activate::ActivateArgs),

    /// Validate and store one submission
    Submit(commands::submit::SubmitArgs),

    /// Print every stored submission, oldest first
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Config
    load_dotenv();
    let store = StoreConfig::from_env();
    LoggingConfig::from_env().init();

    // 2. Route
    let cli = Cli::parse();
    match cli.command {
        Commands::Activate(args) => {
            commands::activate::execute(&store, args).await?;
        }
        Commands::Submit(args) => {
            let repo = store.open().await?;
            commands::submit::execute(repo, args).await?;
        }
        Commands::List(args) => {
            let repo = store.open().await?;
            commands::list::execute(repo, args).await?;
        }
    }

    Ok(())
}
