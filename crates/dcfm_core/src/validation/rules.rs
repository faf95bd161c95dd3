use super::{ValidationError, ValidationRule};
use crate::models::submission::{Field, NewSubmission, SubmissionFields};
use crate::sanitize::is_email;

// =========================================================================
// RULE: required-field
// "name and message must not be empty once sanitized"
// =========================================================================
pub struct RequiredFieldRule(pub Field);

impl ValidationRule for RequiredFieldRule {
    fn rule_id(&self) -> &'static str {
        "required-field"
    }

    fn check(&self, _raw: &SubmissionFields, clean: &NewSubmission) -> Vec<ValidationError> {
        let mut errors = vec![];
        if clean.field(self.0).is_empty() {
            errors.push(ValidationError::MissingField { field: self.0 });
        }
        errors
    }
}

// =========================================================================
// RULE: email-format
// An empty address is a missing field; anything else that fails the
// address grammar after sanitization is an invalid email.
// =========================================================================
pub struct EmailFormatRule;

impl ValidationRule for EmailFormatRule {
    fn rule_id(&self) -> &'static str {
        "email-format"
    }

    fn check(&self, raw: &SubmissionFields, clean: &NewSubmission) -> Vec<ValidationError> {
        let mut errors = vec![];

        if raw.email.trim().is_empty() {
            errors.push(ValidationError::MissingField { field: Field::Email });
        } else if !is_email(clean.email()) {
            errors.push(ValidationError::InvalidEmail {
                value: raw.email.trim().to_string(),
            });
        }
        errors
    }
}

// =========================================================================
// RULE: max-length
// Column widths of the submission table (varchar(255) / varchar(50)).
// =========================================================================
pub struct MaxLengthRule {
    pub field: Field,
    pub max: usize,
}

impl ValidationRule for MaxLengthRule {
    fn rule_id(&self) -> &'static str {
        "max-length"
    }

    fn check(&self, _raw: &SubmissionFields, clean: &NewSubmission) -> Vec<ValidationError> {
        let mut errors = vec![];
        if clean.field(self.field).chars().count() > self.max {
            errors.push(ValidationError::TooLong {
                field: self.field,
                max: self.max,
            });
        }
        errors
    }
}

pub const MAX_TEXT_LEN: usize = 255;
pub const MAX_PHONE_LEN: usize = 50;
