use crate::error::{Error, Result};
use crate::ContactFormService;
use dcfm_core::models::{Submission, SubmissionFields, SubmissionId};
use dcfm_db::SubmissionRepository;

/// Validates and stores one submission.
///
/// Rejected input never reaches the store.
pub async fn store_submission(repo: &SubmissionRepository, fields: &SubmissionFields) -> Result<SubmissionId> {
    // 1. Sanitize + validate
    let clean = dcfm_core::validate_all(fields).map_err(Error::Validation)?;

    // 2. Persist
    let id = repo.insert(&clean).await?;

    Ok(id)
}

impl ContactFormService {
    pub async fn submit(&self, fields: &SubmissionFields) -> Result<SubmissionId> {
        store_submission(&self.repo, fields).await
    }

    pub async fn list_entries(&self) -> Result<Vec<Submission>> {
        Ok(self.repo.list_all().await?)
    }
}
