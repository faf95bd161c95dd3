use anyhow::Result;
use clap::Args;
use dcfm_db::SubmissionRepository;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the entries as a JSON array instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(repo: SubmissionRepository, args: ListArgs) -> Result<()> {
    let entries = repo.list_all().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No submissions yet.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "#{} [{}] {} <{}> phone: {} company: {}",
            entry.id, entry.created_at, entry.name, entry.email, entry.phone, entry.company_name
        );
        for line in entry.message.lines() {
            println!("    {}", line);
        }
    }
    println!("{} submission(s)", entries.len());
    Ok(())
}
