pub mod models;
pub mod sanitize;
pub mod validation;

use models::submission::{Field, NewSubmission, SubmissionFields};
use validation::rules::{self, EmailFormatRule, MaxLengthRule, RequiredFieldRule};
use validation::{ValidationEngine, ValidationError};

pub fn get_standard_validator() -> ValidationEngine {
    ValidationEngine::new()
        .add_rule(RequiredFieldRule(Field::Name))
        .add_rule(EmailFormatRule)
        .add_rule(RequiredFieldRule(Field::Message))
        .add_rule(MaxLengthRule { field: Field::Name, max: rules::MAX_TEXT_LEN })
        .add_rule(MaxLengthRule { field: Field::Email, max: rules::MAX_TEXT_LEN })
        .add_rule(MaxLengthRule { field: Field::Phone, max: rules::MAX_PHONE_LEN })
        .add_rule(MaxLengthRule { field: Field::CompanyName, max: rules::MAX_TEXT_LEN })
}

/// Runs every field through its sanitizer. Absent optional fields become `""`.
pub fn sanitize_fields(raw: &SubmissionFields) -> NewSubmission {
    NewSubmission {
        name: sanitize::sanitize_text_field(&raw.name),
        email: sanitize::sanitize_email(&raw.email),
        phone: raw.phone.as_deref().map(sanitize::sanitize_text_field).unwrap_or_default(),
        company_name: raw
            .company
            .as_deref()
            .map(sanitize::sanitize_text_field)
            .unwrap_or_default(),
        message: sanitize::sanitize_textarea_field(&raw.message),
    }
}

/// Sanitizes and validates, reporting every rule that failed.
pub fn validate_all(raw: &SubmissionFields) -> Result<NewSubmission, Vec<ValidationError>> {
    let clean = sanitize_fields(raw);
    let errors = get_standard_validator().run(raw, &clean);

    if errors.is_empty() {
        Ok(clean)
    } else {
        Err(errors)
    }
}

/// Sanitizes and validates, stopping at the first failure.
pub fn validate(raw: &SubmissionFields) -> Result<NewSubmission, ValidationError> {
    validate_all(raw).map_err(|mut errors| errors.swap_remove(0))
}
