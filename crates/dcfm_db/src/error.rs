use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid table prefix '{0}': only ASCII letters, digits and '_' are allowed")]
    InvalidTableName(String),

    #[error("Schema asset error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
