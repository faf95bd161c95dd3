use dcfm_core::models::{NewSubmission, Submission, SubmissionId};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::SubmissionEntity;
use crate::schema::TableName;

/// Append-only store for contact form submissions.
///
/// Built once at startup and handed to whoever needs to insert or list.
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct SubmissionRepository {
    pool: SqlitePool,
    table: TableName,
}

impl SubmissionRepository {
    pub fn new(pool: SqlitePool, table: TableName) -> Self {
        Self { pool, table }
    }

    pub fn table(&self) -> &TableName {
        &self.table
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Persists a validated submission; the store assigns `id` and `created_at`.
    ///
    /// The timestamp is taken inside the INSERT, under SQLite's write lock, so
    /// `created_at` never decreases as ids ascend.
    pub async fn insert(&self, submission: &NewSubmission) -> Result<SubmissionId> {
        let id: i64 = sqlx::query_scalar(&format!(
            r#"
            INSERT INTO {}
            (name, email, phone, company_name, message, time)
            VALUES (?, ?, ?, ?, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            RETURNING id
            "#,
            self.table.ident()
        ))
        .bind(submission.name())
        .bind(submission.email())
        .bind(submission.phone())
        .bind(submission.company_name())
        .bind(submission.message())
        .fetch_one(&self.pool)
        .await?;

        Ok(SubmissionId(id))
    }

    /// Every stored submission, oldest first. Empty when nothing was submitted yet.
    pub async fn list_all(&self) -> Result<Vec<Submission>> {
        let rows = sqlx::query_as::<_, SubmissionEntity>(&format!(
            r#"
            SELECT id, name, email, phone, company_name, message, time
            FROM {}
            ORDER BY id ASC
            "#,
            self.table.ident()
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Submission::from).collect())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", self.table.ident()))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
