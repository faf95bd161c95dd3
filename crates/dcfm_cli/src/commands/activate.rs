use anyhow::Result;
use clap::Args;
use dcfm_service::config::StoreConfig;

#[derive(Debug, Args)]
pub struct ActivateArgs {}

/// Creates the submission table if it is missing. Safe to repeat.
pub async fn execute(store: &StoreConfig, _args: ActivateArgs) -> Result<()> {
    println!("🏗️  Activating contact form store...");

    let repo = store.activate().await?;

    println!("✅ Table {} is ready ({} entries).", repo.table(), repo.count().await?);
    Ok(())
}
