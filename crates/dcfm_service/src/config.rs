use anyhow::{Context, Result};
use dcfm_db::schema::DEFAULT_TABLE_PREFIX;
use dcfm_db::{SubmissionRepository, TableName};
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Loads `.env` if present. Real environment variables win.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Reads variables from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub database_url: String,
    pub table_prefix: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_vars(process_env)
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        StoreConfig {
            database_url: var("DATABASE_URL").unwrap_or_else(|| "sqlite://dcfm.db".to_string()),
            table_prefix: var("DCFM_TABLE_PREFIX").unwrap_or_else(|| DEFAULT_TABLE_PREFIX.to_string()),
        }
    }

    pub fn table_name(&self) -> Result<TableName> {
        TableName::with_prefix(&self.table_prefix).context("DCFM_TABLE_PREFIX is invalid")
    }

    /// Connects and returns the store. Does not touch the schema.
    pub async fn open(&self) -> Result<SubmissionRepository> {
        let table = self.table_name()?;
        let pool = dcfm_db::connect(&self.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", self.database_url))?;
        Ok(SubmissionRepository::new(pool, table))
    }

    /// Connects and makes sure the submission table exists.
    pub async fn activate(&self) -> Result<SubmissionRepository> {
        let repo = self.open().await?;
        dcfm_db::ensure_schema(repo.pool(), repo.table())
            .await
            .context("Failed to create the submission table")?;
        Ok(repo)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(process_env)
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        LoggingConfig {
            level: var("DCFM_LOG_LEVEL").unwrap_or(defaults.level),
            format: var("DCFM_LOG_FORMAT").unwrap_or(defaults.format),
        }
    }

    /// Initialize the tracing subscriber. `RUST_LOG` overrides the level.
    ///
    /// Logs go to stderr so command output on stdout stays machine readable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
            _ => {
                fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
