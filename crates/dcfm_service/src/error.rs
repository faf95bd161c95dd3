use dcfm_core::validation::ValidationError;
use dcfm_db::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Anti-forgery token check failed")]
    ForgeryCheckFailed,
}

fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;
