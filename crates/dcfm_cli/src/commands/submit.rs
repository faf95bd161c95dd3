use anyhow::{bail, Result};
use clap::Args;
use dcfm_core::models::SubmissionFields;
use dcfm_db::SubmissionRepository;
use dcfm_service::submission::store_submission;
use dcfm_service::Error;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Sender's name
    #[arg(long)]
    pub name: String,

    /// Sender's email address
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    /// Message body; may span several lines
    #[arg(long)]
    pub message: String,
}

impl SubmitArgs {
    fn fields(self) -> SubmissionFields {
        SubmissionFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            message: self.message,
        }
    }
}

pub async fn execute(repo: SubmissionRepository, args: SubmitArgs) -> Result<()> {
    match store_submission(&repo, &args.fields()).await {
        Ok(id) => {
            tracing::info!(%id, "submission stored from the command line");
            println!("✅ Data inserted successfully");
            println!("🔑 ID: {}", id);
            Ok(())
        }
        Err(Error::Validation(errors)) => {
            for error in &errors {
                eprintln!("❌ {}", error);
            }
            bail!("submission rejected with {} error(s)", errors.len());
        }
        Err(e) => Err(e.into()),
    }
}
