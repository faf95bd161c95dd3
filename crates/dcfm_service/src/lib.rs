pub mod config;
pub mod error;
pub mod form;
pub mod nonce;
pub mod render;
pub mod submission;

use dcfm_db::SubmissionRepository;
use nonce::NonceIssuer;

pub use error::{Error, Result};

/// Everything a request needs to accept or display submissions.
///
/// Constructed once at process start and shared; both entry points (the
/// JSON API and the HTML form) go through the same instance.
#[derive(Clone)]
pub struct ContactFormService {
    pub repo: SubmissionRepository,
    pub nonces: NonceIssuer,
}

impl ContactFormService {
    pub fn new(repo: SubmissionRepository, nonces: NonceIssuer) -> Self {
        Self { repo, nonces }
    }
}
