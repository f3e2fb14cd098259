//! # Boundary trait
//!
//! Every call the views make that a real deployment would route to a server
//! goes through [`Backend`]. The only implementation today is
//! [`crate::MockBackend`], which answers from the static catalog after a
//! configurable delay.

use std::future::Future;

use serde::{Deserialize, Serialize};
use store::models::{PricingPlan, TemplateDownload, TemplateRecord};
use store::{ApplicationRecord, AuthResponse, Credentials, IntakeForm, Scholarship, ValidationError};

use crate::error::ApiError;

/// What the details screen sends when the user submits an application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub scholarship_id: u32,
    /// One answer per question prompt, in order.
    pub answers: Vec<String>,
    /// One uploaded file name per required document, in order.
    pub documents: Vec<Option<String>>,
}

impl ApplicationSubmission {
    pub fn new(scholarship: &Scholarship) -> Self {
        Self {
            scholarship_id: scholarship.id,
            answers: vec![String::new(); scholarship.questions.len()],
            documents: vec![None; scholarship.required_documents.len()],
        }
    }

    /// Every question answered and every required document attached.
    pub fn validate(&self, scholarship: &Scholarship) -> Result<(), ValidationError> {
        for i in 0..scholarship.questions.len() {
            let answered = self.answers.get(i).is_some_and(|a| !a.trim().is_empty());
            if !answered {
                return Err(ValidationError::MissingAnswer(i));
            }
        }
        for (i, doc) in scholarship.required_documents.iter().enumerate() {
            let attached = self
                .documents
                .get(i)
                .and_then(Option::as_deref)
                .is_some_and(|f| !f.trim().is_empty());
            if !attached {
                return Err(ValidationError::MissingDocument(doc.clone()));
            }
        }
        Ok(())
    }

    pub fn is_complete(&self, scholarship: &Scholarship) -> bool {
        self.validate(scholarship).is_ok()
    }
}

/// The simulated network boundary.
pub trait Backend {
    fn authenticate(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    fn submit_profile(&self, form: &IntakeForm) -> impl Future<Output = Result<(), ApiError>>;

    fn fetch_results(
        &self,
        form: &IntakeForm,
    ) -> impl Future<Output = Result<Vec<Scholarship>, ApiError>>;

    fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> impl Future<Output = Result<ApplicationRecord, ApiError>>;

    fn list_templates(&self) -> impl Future<Output = Result<Vec<TemplateRecord>, ApiError>>;

    fn download_template(
        &self,
        id: u32,
        has_premium: bool,
    ) -> impl Future<Output = Result<TemplateDownload, ApiError>>;

    /// Parse an uploaded résumé into partial intake answers.
    fn extract_resume(&self, file_name: &str) -> impl Future<Output = Result<IntakeForm, ApiError>>;

    fn subscribe(&self, plan_id: &str) -> impl Future<Output = Result<PricingPlan, ApiError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scholarship() -> Scholarship {
        store::catalog::find_scholarship(1).unwrap().clone()
    }

    #[test]
    fn test_new_submission_is_incomplete() {
        let s = scholarship();
        let submission = ApplicationSubmission::new(&s);
        assert_eq!(submission.answers.len(), s.questions.len());
        assert_eq!(
            submission.validate(&s),
            Err(ValidationError::MissingAnswer(0))
        );
    }

    #[test]
    fn test_documents_checked_after_answers() {
        let s = scholarship();
        let mut submission = ApplicationSubmission::new(&s);
        for a in &mut submission.answers {
            *a = "我的回答".into();
        }
        assert_eq!(
            submission.validate(&s),
            Err(ValidationError::MissingDocument(s.required_documents[0].clone()))
        );

        for d in &mut submission.documents {
            *d = Some("file.pdf".into());
        }
        assert!(submission.is_complete(&s));
    }

    #[test]
    fn test_blank_answer_is_missing() {
        let s = scholarship();
        let mut submission = ApplicationSubmission::new(&s);
        submission.answers = vec!["ok".into(); s.questions.len()];
        submission.answers[1] = "   ".into();
        assert_eq!(
            submission.validate(&s),
            Err(ValidationError::MissingAnswer(1))
        );
    }
}
