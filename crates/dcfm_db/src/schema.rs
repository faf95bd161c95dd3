use rust_embed::RustEmbed;
use sqlx::{Executor, SqlitePool};
use std::fmt;
use std::str;

use crate::error::{Result, StoreError};

#[derive(RustEmbed)]
#[folder = "schema/"]
struct SchemaAssets;

const BUILD_ORDER: &str = "00_build_order.sql";
const TABLE_PLACEHOLDER: &str = "{{table}}";

pub const BASE_TABLE_NAME: &str = "devnetix_contact_form";
pub const DEFAULT_TABLE_PREFIX: &str = "wp_";

/// Name of the submission table: `<prefix>devnetix_contact_form`.
///
/// The prefix is checked once here, which is what makes it safe to splice
/// the name into SQL text everywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn with_prefix(prefix: &str) -> Result<Self> {
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StoreError::InvalidTableName(prefix.to_string()));
        }
        Ok(Self(format!("{}{}", prefix, BASE_TABLE_NAME)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quoted identifier for use in SQL text.
    pub fn ident(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl Default for TableName {
    fn default() -> Self {
        Self(format!("{}{}", DEFAULT_TABLE_PREFIX, BASE_TABLE_NAME))
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creates the submission table if it does not exist yet.
///
/// Reads the build order and applies all included SQL files in a single
/// transaction. Safe to call on every start.
pub async fn ensure_schema(pool: &SqlitePool, table: &TableName) -> Result<()> {
    let script = build_script(table)?;

    let mut tx = pool.begin().await?;
    (&mut *tx).execute(script.as_str()).await?;
    tx.commit().await?;

    tracing::info!(table = %table, "schema ensured");
    Ok(())
}

/// Whether the submission table is present.
pub async fn table_exists(pool: &SqlitePool, table: &TableName) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table.as_str())
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

fn build_script(table: &TableName) -> Result<String> {
    // 1. Read the Manifest
    let manifest = get_file_content(BUILD_ORDER)?;

    // 2. Parse and Aggregate SQL
    let mut full_script = String::new();

    for line in manifest.lines() {
        let trimmed = line.trim();

        // Parse: -- @include folder/file.sql
        if let Some(path) = parse_include_directive(trimmed) {
            tracing::debug!(path, "including schema file");
            full_script.push_str(&get_file_content(path)?);
            full_script.push('\n');
        } else if !trimmed.starts_with("--") {
            full_script.push_str(line);
            full_script.push('\n');
        }
    }

    // 3. Bind the table name
    Ok(full_script.replace(TABLE_PLACEHOLDER, &table.ident()))
}

fn get_file_content(path: &str) -> Result<String> {
    let file = SchemaAssets::get(path)
        .ok_or_else(|| StoreError::Schema(format!("missing embedded file: {}", path)))?;

    str::from_utf8(file.data.as_ref())
        .map(str::to_string)
        .map_err(|e| StoreError::Schema(format!("{} is not valid UTF-8: {}", path, e)))
}

fn parse_include_directive(line: &str) -> Option<&str> {
    if line.starts_with("--") && line.contains("@include") {
        line.split_whitespace().last()
    } else {
        None
    }
}
