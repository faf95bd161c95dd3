use dcfm_core::models::{Submission, SubmissionId};
use sqlx::FromRow;
use time::OffsetDateTime;

/// One row of the submission table. The timestamp column is named `time`.
#[derive(Debug, FromRow)]
pub struct SubmissionEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub message: String,
    #[sqlx(rename = "time")]
    pub created_at: OffsetDateTime,
}

impl From<SubmissionEntity> for Submission {
    fn from(row: SubmissionEntity) -> Self {
        Submission {
            id: SubmissionId(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            company_name: row.company_name,
            message: row.message,
            created_at: row.created_at,
        }
    }
}
