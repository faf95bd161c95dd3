use crate::models::submission::{Field, NewSubmission, SubmissionFields};
use serde::Serialize;
use thiserror::Error;

pub mod rules;

// The structure of a failure
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField {
        #[serde(serialize_with = "serialize_field")]
        field: Field,
    },

    #[error("'{value}' is not a valid email address")]
    InvalidEmail { value: String },

    #[error("{field} must be at most {max} characters")]
    TooLong {
        #[serde(serialize_with = "serialize_field")]
        field: Field,
        max: usize,
    },
}

fn serialize_field<S: serde::Serializer>(field: &Field, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(field.as_str())
}

/// The contract every rule must fulfill.
///
/// Rules see both the raw input and its sanitized form, so they can tell
/// "nothing was sent" apart from "nothing survived sanitization".
pub trait ValidationRule {
    fn check(&self, raw: &SubmissionFields, clean: &NewSubmission) -> Vec<ValidationError>;
    fn rule_id(&self) -> &'static str;
}

// The Engine that holds the registry of all rules
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule + Send + Sync>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule<R: ValidationRule + Send + Sync + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn run(&self, raw: &SubmissionFields, clean: &NewSubmission) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            let mut rule_errors = rule.check(raw, clean);
            errors.append(&mut rule_errors);
        }
        errors
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
