pub mod form;
pub mod submission;

use dcfm_core::models::SubmissionId;
use dcfm_core::validation::ValidationError;
use serde::Serialize;

/// Body of every non-list JSON response.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SubmissionId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
            errors: Vec::new(),
        }
    }
}

pub async fn health_check() -> &'static str {
    "OK"
}
