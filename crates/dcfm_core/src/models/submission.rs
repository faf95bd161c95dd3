use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub i64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Columns of the submission table, as seen by validation rules
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    CompanyName,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::CompanyName => "company_name",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// 1. Raw input: whatever the visitor (or API client) sent us
// ---------------------------------------------------------------------------
/// Untrusted contact form input. `phone` and `company` may be omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
}

// ---------------------------------------------------------------------------
// 2. Clean input: sanitized and validated, ready for the store
// ---------------------------------------------------------------------------
/// A submission that passed sanitization and every validation rule.
///
/// There is no public constructor; obtain one through [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) company_name: String,
    pub(crate) message: String,
}

impl NewSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::CompanyName => &self.company_name,
            Field::Message => &self.message,
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Stored record
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub message: String,

    // Audit
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
