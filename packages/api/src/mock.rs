use store::catalog;
use store::models::{is_supported_resume, PricingPlan, TemplateDownload, TemplateRecord};
use store::{
    ApplicationRecord, AuthResponse, Credentials, IntakeForm, LoginMethod, Scholarship,
    ScholarMatchConfig, ValidationError,
};

use crate::backend::{ApplicationSubmission, Backend};
use crate::delay::sleep_ms;
use crate::error::ApiError;

/// Answers every boundary call from the static catalog after the configured delay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockBackend {
    config: ScholarMatchConfig,
}

impl MockBackend {
    pub fn new(config: ScholarMatchConfig) -> Self {
        Self { config }
    }
}

/// `wx_` followed by nine random lowercase alphanumerics.
fn new_wechat_id() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    format!("wx_{}", &raw[..9])
}

impl Backend for MockBackend {
    async fn authenticate(&self, credentials: Credentials) -> Result<AuthResponse, ApiError> {
        if let Err(e) = credentials.validate() {
            tracing::warn!("rejected credentials: {}", e);
            return Err(e.into());
        }

        match credentials {
            Credentials::Email { email } => {
                sleep_ms(self.config.latency.auth_ms).await;
                let email = email.trim().to_string();
                let is_returning_user = self.config.auth.is_returning(&email);
                tracing::info!(returning = is_returning_user, "email login");
                Ok(AuthResponse {
                    name: None,
                    email: Some(email),
                    login_method: LoginMethod::Email,
                    wechat_id: None,
                    is_returning_user,
                })
            }
            Credentials::WeChat => {
                sleep_ms(self.config.latency.wechat_auth_ms).await;
                let wechat_id = new_wechat_id();
                tracing::info!(%wechat_id, "wechat login");
                Ok(AuthResponse {
                    name: Some("微信用户".to_string()),
                    email: None,
                    login_method: LoginMethod::WeChat,
                    wechat_id: Some(wechat_id),
                    is_returning_user: false,
                })
            }
        }
    }

    async fn submit_profile(&self, form: &IntakeForm) -> Result<(), ApiError> {
        form.validate()?;
        sleep_ms(self.config.latency.submit_ms).await;
        tracing::info!(name = %form.name, "profile submitted");
        Ok(())
    }

    async fn fetch_results(&self, _form: &IntakeForm) -> Result<Vec<Scholarship>, ApiError> {
        Ok(catalog::scholarships().to_vec())
    }

    async fn submit_application(
        &self,
        submission: &ApplicationSubmission,
    ) -> Result<ApplicationRecord, ApiError> {
        let scholarship = catalog::find_scholarship(submission.scholarship_id)
            .ok_or(ApiError::UnknownScholarship(submission.scholarship_id))?;
        if let Err(e) = submission.validate(scholarship) {
            tracing::warn!(scholarship = scholarship.id, "incomplete application: {}", e);
            return Err(e.into());
        }

        sleep_ms(self.config.latency.submit_ms).await;
        let record = ApplicationRecord::submitted(scholarship.clone(), store::clock::today());
        tracing::info!(
            scholarship = scholarship.id,
            application = %record.application_id,
            "application accepted"
        );
        Ok(record)
    }

    async fn list_templates(&self) -> Result<Vec<TemplateRecord>, ApiError> {
        Ok(catalog::templates().to_vec())
    }

    async fn download_template(
        &self,
        id: u32,
        has_premium: bool,
    ) -> Result<TemplateDownload, ApiError> {
        let template = catalog::find_template(id).ok_or(ApiError::UnknownTemplate(id))?;
        if template.is_premium && !has_premium {
            return Err(ApiError::PremiumRequired);
        }
        tracing::info!(template = id, "template downloaded");
        Ok(TemplateDownload {
            file_name: format!("{}.txt", template.title),
            content: template.preview.clone(),
        })
    }

    async fn extract_resume(&self, file_name: &str) -> Result<IntakeForm, ApiError> {
        if !is_supported_resume(file_name) {
            return Err(ValidationError::UnsupportedResumeFormat(file_name.to_string()).into());
        }
        sleep_ms(self.config.latency.resume_extract_ms).await;
        tracing::info!(file_name, "resume parsed");
        Ok(catalog::resume_extraction())
    }

    async fn subscribe(&self, plan_id: &str) -> Result<PricingPlan, ApiError> {
        let plan = catalog::find_plan(plan_id)
            .ok_or_else(|| ApiError::UnknownPlan(plan_id.to_string()))?;
        sleep_ms(self.config.latency.submit_ms).await;
        tracing::info!(plan = %plan.id, "subscribed");
        Ok(plan.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{ApplicationStatus, IntakeQuestion};

    fn backend() -> MockBackend {
        MockBackend::new(ScholarMatchConfig::instant())
    }

    fn email(s: &str) -> Credentials {
        Credentials::Email { email: s.to_string() }
    }

    #[tokio::test]
    async fn test_email_login() {
        let auth = backend().authenticate(email(" alice@example.com ")).await.unwrap();
        assert_eq!(auth.email.as_deref(), Some("alice@example.com"));
        assert_eq!(auth.login_method, LoginMethod::Email);
        assert!(!auth.is_returning_user);
    }

    #[tokio::test]
    async fn test_configured_email_is_returning() {
        let auth = backend().authenticate(email("Demo@ScholarMatch.cn")).await.unwrap();
        assert!(auth.is_returning_user);
    }

    #[tokio::test]
    async fn test_empty_email_rejected() {
        let err = backend().authenticate(email("  ")).await.unwrap_err();
        assert_eq!(err, ApiError::Validation(ValidationError::EmptyEmail));
    }

    #[tokio::test]
    async fn test_wechat_login_generates_id() {
        let auth = backend().authenticate(Credentials::WeChat).await.unwrap();
        let id = auth.wechat_id.unwrap();
        assert!(id.starts_with("wx_"));
        assert_eq!(id.len(), 12);
        assert!(id[3..].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(auth.name.as_deref(), Some("微信用户"));
    }

    #[tokio::test]
    async fn test_submit_profile_requires_all_answers() {
        let partial = IntakeForm {
            name: "张三".into(),
            ..Default::default()
        };
        let err = backend().submit_profile(&partial).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation(ValidationError::UnansweredQuestion(IntakeQuestion::Education))
        );

        let full = IntakeForm::returning_user_default("张三");
        assert!(backend().submit_profile(&full).await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_results_is_whole_catalog() {
        let results = backend()
            .fetch_results(&IntakeForm::default())
            .await
            .unwrap();
        assert_eq!(results.len(), catalog::scholarships().len());
    }

    #[tokio::test]
    async fn test_submit_application() {
        let scholarship = catalog::find_scholarship(2).unwrap();
        let mut submission = ApplicationSubmission::new(scholarship);
        let err = backend().submit_application(&submission).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ValidationError::MissingAnswer(0))));

        submission.answers = vec!["回答".into(); scholarship.questions.len()];
        submission.documents = vec![Some("doc.pdf".into()); scholarship.required_documents.len()];
        let record = backend().submit_application(&submission).await.unwrap();
        assert_eq!(record.scholarship_id(), 2);
        assert_eq!(record.status, ApplicationStatus::Submitted);
        assert!(record.application_id.starts_with("APP-"));
    }

    #[tokio::test]
    async fn test_submit_application_unknown_id() {
        let submission = ApplicationSubmission {
            scholarship_id: 404,
            ..Default::default()
        };
        let err = backend().submit_application(&submission).await.unwrap_err();
        assert_eq!(err, ApiError::UnknownScholarship(404));
    }

    #[tokio::test]
    async fn test_premium_template_gated() {
        let b = backend();
        assert_eq!(b.list_templates().await.unwrap().len(), 6);
        assert_eq!(
            b.download_template(3, false).await.unwrap_err(),
            ApiError::PremiumRequired
        );
        let download = b.download_template(3, true).await.unwrap();
        assert!(download.file_name.ends_with(".txt"));
        assert!(b.download_template(1, false).await.is_ok());
        assert_eq!(
            b.download_template(77, true).await.unwrap_err(),
            ApiError::UnknownTemplate(77)
        );
    }

    #[tokio::test]
    async fn test_free_portal_templates_download_without_premium() {
        let b = backend();
        for entry in catalog::portal_templates().into_iter().filter(|t| t.free) {
            let id = entry.template_id.unwrap();
            let download = b.download_template(id, false).await.unwrap();
            assert!(!download.content.is_empty(), "{}", entry.name);
        }
    }

    #[tokio::test]
    async fn test_extract_resume() {
        let b = backend();
        let err = b.extract_resume("photo.png").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::UnsupportedResumeFormat(_))
        ));
        let form = b.extract_resume("cv.pdf").await.unwrap();
        assert_eq!(form.name, "张三");
        assert!(form.target_country.is_none());
    }

    #[tokio::test]
    async fn test_subscribe() {
        let b = backend();
        assert_eq!(b.subscribe("pro").await.unwrap().price, "¥259");
        assert_eq!(
            b.subscribe("vip").await.unwrap_err(),
            ApiError::UnknownPlan("vip".into())
        );
    }
}
