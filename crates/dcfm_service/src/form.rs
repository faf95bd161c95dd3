use serde::Deserialize;

use crate::error::{Error, Result};
use crate::nonce::FORM_ACTION;
use crate::ContactFormService;
use dcfm_core::models::{SubmissionFields, SubmissionId};

/// Fields posted by the rendered contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPost {
    pub dcfm_name: Option<String>,
    pub dcfm_email: Option<String>,
    pub dcfm_phone: Option<String>,
    pub dcfm_company: Option<String>,
    pub dcfm_message: Option<String>,
    pub dcfm_nonce: Option<String>,
}

impl FormPost {
    pub fn fields(&self) -> SubmissionFields {
        SubmissionFields {
            name: self.dcfm_name.clone().unwrap_or_default(),
            email: self.dcfm_email.clone().unwrap_or_default(),
            phone: self.dcfm_phone.clone(),
            company: self.dcfm_company.clone(),
            message: self.dcfm_message.clone().unwrap_or_default(),
        }
    }
}

impl ContactFormService {
    /// Token to embed in a form rendered for `session`.
    pub fn form_nonce(&self, session: &str) -> String {
        self.nonces.create(FORM_ACTION, session)
    }

    /// Handles a POST of the contact form.
    ///
    /// The outcome is only logged; callers may use the returned value to
    /// decide what to show, but nothing about it is part of the form's contract.
    pub async fn handle_form_post(&self, post: &FormPost, session: &str) -> Result<SubmissionId> {
        // 1. Check the anti-forgery token before touching anything else
        let token = post.dcfm_nonce.as_deref().unwrap_or_default();
        if self.nonces.verify(token, FORM_ACTION, session).is_none() {
            tracing::warn!("Invalid form submission detected");
            return Err(Error::ForgeryCheckFailed);
        }

        // 2. Same pipeline as the API
        match self.submit(&post.fields()).await {
            Ok(id) => {
                tracing::info!(%id, "Data inserted successfully");
                Ok(id)
            }
            Err(Error::Validation(errors)) => {
                tracing::warn!(?errors, "Form submission rejected by validation");
                Err(Error::Validation(errors))
            }
            Err(e) => {
                tracing::error!(error = %e, "Database insertion error");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::tests::service;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn post(nonce: Option<String>) -> FormPost {
        FormPost {
            dcfm_name: Some("Ann".to_string()),
            dcfm_email: Some("ann@example.com".to_string()),
            dcfm_phone: None,
            dcfm_company: None,
            dcfm_message: Some("Hi".to_string()),
            dcfm_nonce: nonce,
        }
    }

    #[tokio::test]
    async fn test_valid_token_stores_submission() {
        let service = service().await;
        let nonce = service.form_nonce("visitor-1");

        let id = service.handle_form_post(&post(Some(nonce)), "visitor-1").await.unwrap();

        let entries = service.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].phone, "");
        assert_eq!(entries[0].company_name, "");
    }

    #[tokio::test]
    async fn test_missing_or_tampered_token_is_discarded_and_logged() {
        let service = service().await;
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let foreign = service.form_nonce("someone-else");
        for nonce in [None, Some("0123456789abcdef0123".to_string()), Some(foreign)] {
            let err = service.handle_form_post(&post(nonce), "visitor-1").await.unwrap_err();
            assert!(matches!(err, Error::ForgeryCheckFailed));
        }

        assert_eq!(service.repo.count().await.unwrap(), 0);
        assert_eq!(logs.contents().matches("Invalid form submission detected").count(), 3);
    }

    #[tokio::test]
    async fn test_valid_token_with_invalid_fields_stores_nothing() {
        let service = service().await;
        let mut form = post(Some(service.form_nonce("visitor-1")));
        form.dcfm_email = Some("not-an-email".to_string());

        let err = service.handle_form_post(&form, "visitor-1").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(service.repo.count().await.unwrap(), 0);
    }
}
