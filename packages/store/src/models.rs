//! # Domain models for the matching session
//!
//! Every record that crosses a screen boundary is typed here so the controller's
//! action payloads never carry loosely-shaped data. All types are
//! `Serialize + Deserialize` so they can later cross a real network boundary.
//!
//! ## Catalog records (read-only)
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Scholarship`] | One funding opportunity: amount, deadline, requirements, application prompts, the hardcoded match breakdown. |
//! | [`TemplateRecord`] | A downloadable writing template (personal statement, recommendation letter, …). |
//! | [`Notification`] | An entry in the portal's notification center. |
//! | [`PricingPlan`] | A premium subscription tier shown in the pricing modal. |
//! | [`SuccessCase`] | A testimonial card on the home page. |
//!
//! ## Session records (created at runtime)
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`SessionUser`] | The authenticated identity, derived from an [`AuthResponse`]. |
//! | [`IntakeForm`] | The answers collected by the intake flow (`formData`). |
//! | [`ApplicationRecord`] | A submitted application, at most one per scholarship. |
//! | [`ProfileDraft`] | The editable portal profile used for completion percentage. |

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Screens the controller can show. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Auth,
    Form,
    Results,
    Details,
    Portal,
    Templates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    Email,
    #[serde(rename = "wechat")]
    WeChat,
}

/// What the user typed (or scanned) on the auth screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Credentials {
    Email { email: String },
    WeChat,
}

impl Credentials {
    pub fn login_method(&self) -> LoginMethod {
        match self {
            Credentials::Email { .. } => LoginMethod::Email,
            Credentials::WeChat => LoginMethod::WeChat,
        }
    }

    /// Reject credentials that must not reach the auth boundary.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Credentials::Email { email } => {
                let email = email.trim();
                if email.is_empty() {
                    return Err(ValidationError::EmptyEmail);
                }
                if !email.contains('@') {
                    return Err(ValidationError::InvalidEmail(email.to_string()));
                }
                Ok(())
            }
            Credentials::WeChat => Ok(()),
        }
    }
}

/// Result of the auth boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: LoginMethod,
    /// Only set for WeChat logins: `wx_` followed by nine random characters.
    #[serde(default)]
    pub wechat_id: Option<String>,
    #[serde(default)]
    pub is_returning_user: bool,
}

/// The authenticated identity held by the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: Option<String>,
    pub login_method: LoginMethod,
    pub wechat_id: Option<String>,
}

impl SessionUser {
    /// Build the session identity, deriving a display name when the boundary
    /// did not provide one: email local part, else a generic "同学".
    pub fn from_auth(auth: &AuthResponse) -> Self {
        let name = auth
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| auth.email.as_deref().map(email_local_part))
            .unwrap_or_else(|| "同学".to_string());

        Self {
            name,
            email: auth.email.clone(),
            login_method: auth.login_method,
            wechat_id: auth.wechat_id.clone(),
        }
    }
}

/// `"alice@example.com"` → `"alice"`.
pub fn email_local_part(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Education {
    HighSchool,
    Bachelor,
    Master,
    Phd,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Bachelor,
        Education::Master,
        Education::Phd,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Education::HighSchool => "high-school",
            Education::Bachelor => "bachelor",
            Education::Master => "master",
            Education::Phd => "phd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Education::HighSchool => "高中",
            Education::Bachelor => "本科",
            Education::Master => "硕士",
            Education::Phd => "博士",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Major {
    ComputerScience,
    Engineering,
    Business,
    Medicine,
    Law,
    Arts,
    Science,
    Education,
    Other,
}

impl Major {
    pub const ALL: [Major; 9] = [
        Major::ComputerScience,
        Major::Engineering,
        Major::Business,
        Major::Medicine,
        Major::Law,
        Major::Arts,
        Major::Science,
        Major::Education,
        Major::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Major::ComputerScience => "computer-science",
            Major::Engineering => "engineering",
            Major::Business => "business",
            Major::Medicine => "medicine",
            Major::Law => "law",
            Major::Arts => "arts",
            Major::Science => "science",
            Major::Education => "education",
            Major::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Major::ComputerScience => "计算机科学",
            Major::Engineering => "工程学",
            Major::Business => "商科",
            Major::Medicine => "医学",
            Major::Law => "法学",
            Major::Arts => "文科",
            Major::Science => "理科",
            Major::Education => "教育学",
            Major::Other => "其他",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetCountry {
    Usa,
    Uk,
    Canada,
    Australia,
    Germany,
    France,
    Singapore,
    Other,
}

impl TargetCountry {
    pub const ALL: [TargetCountry; 8] = [
        TargetCountry::Usa,
        TargetCountry::Uk,
        TargetCountry::Canada,
        TargetCountry::Australia,
        TargetCountry::Germany,
        TargetCountry::France,
        TargetCountry::Singapore,
        TargetCountry::Other,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TargetCountry::Usa => "usa",
            TargetCountry::Uk => "uk",
            TargetCountry::Canada => "canada",
            TargetCountry::Australia => "australia",
            TargetCountry::Germany => "germany",
            TargetCountry::France => "france",
            TargetCountry::Singapore => "singapore",
            TargetCountry::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TargetCountry::Usa => "美国",
            TargetCountry::Uk => "英国",
            TargetCountry::Canada => "加拿大",
            TargetCountry::Australia => "澳大利亚",
            TargetCountry::Germany => "德国",
            TargetCountry::France => "法国",
            TargetCountry::Singapore => "新加坡",
            TargetCountry::Other => "其他",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Answers collected by the intake flow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub name: String,
    pub education: Option<Education>,
    pub gpa: String,
    pub major: Option<Major>,
    pub target_country: Option<TargetCountry>,
}

impl IntakeForm {
    /// Answers synthesized for a returning user who skips the intake flow.
    pub fn returning_user_default(name: &str) -> Self {
        Self {
            name: name.to_string(),
            education: Some(Education::Bachelor),
            gpa: "3.5".to_string(),
            major: Some(Major::ComputerScience),
            target_country: Some(TargetCountry::Usa),
        }
    }

    /// Overlay the non-empty fields of `other` onto `self`.
    pub fn merge(&mut self, other: &IntakeForm) {
        if !other.name.trim().is_empty() {
            self.name = other.name.clone();
        }
        if other.education.is_some() {
            self.education = other.education;
        }
        if !other.gpa.trim().is_empty() {
            self.gpa = other.gpa.clone();
        }
        if other.major.is_some() {
            self.major = other.major;
        }
        if other.target_country.is_some() {
            self.target_country = other.target_country;
        }
    }

    pub fn is_complete(&self) -> bool {
        IntakeQuestion::ALL.iter().all(|q| q.is_answered(self))
    }

    /// First unanswered question, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match IntakeQuestion::ALL.iter().find(|q| !q.is_answered(self)) {
            Some(q) => Err(ValidationError::UnansweredQuestion(*q)),
            None => Ok(()),
        }
    }
}

/// The intake questions, asked one at a time in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntakeQuestion {
    Name,
    Education,
    Gpa,
    Major,
    TargetCountry,
}

impl IntakeQuestion {
    pub const ALL: [IntakeQuestion; 5] = [
        IntakeQuestion::Name,
        IntakeQuestion::Education,
        IntakeQuestion::Gpa,
        IntakeQuestion::Major,
        IntakeQuestion::TargetCountry,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|q| *q == self).unwrap_or(0)
    }

    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            IntakeQuestion::Name => "请告诉我们您的姓名",
            IntakeQuestion::Education => "您目前的学历是什么？",
            IntakeQuestion::Gpa => "您的GPA或平均分是多少？",
            IntakeQuestion::Major => "您的专业领域是什么？",
            IntakeQuestion::TargetCountry => "您希望去哪个国家留学？",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            IntakeQuestion::Name => "这将帮助我们为您提供个性化的服务",
            IntakeQuestion::Education => "这将帮助我们匹配适合您学历层次的奖学金项目",
            IntakeQuestion::Gpa => "学术成绩是奖学金评定的重要标准",
            IntakeQuestion::Major => "不同专业有专门的奖学金项目",
            IntakeQuestion::TargetCountry => "我们将为您匹配目标国家的奖学金项目",
        }
    }

    /// How many catalog entries still match after answering this question.
    pub fn scholarship_count(self) -> u32 {
        match self {
            IntakeQuestion::Name => 1000,
            IntakeQuestion::Education => 856,
            IntakeQuestion::Gpa => 742,
            IntakeQuestion::Major => 623,
            IntakeQuestion::TargetCountry => 445,
        }
    }

    pub fn is_answered(self, form: &IntakeForm) -> bool {
        match self {
            IntakeQuestion::Name => !form.name.trim().is_empty(),
            IntakeQuestion::Education => form.education.is_some(),
            IntakeQuestion::Gpa => !form.gpa.trim().is_empty(),
            IntakeQuestion::Major => form.major.is_some(),
            IntakeQuestion::TargetCountry => form.target_country.is_some(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Match,
    Partial,
    Miss,
}

impl MatchLevel {
    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::Match => "完全符合",
            MatchLevel::Partial => "部分符合",
            MatchLevel::Miss => "不符合",
        }
    }
}

/// Per-criterion breakdown shown when hovering the match badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub gpa: MatchLevel,
    pub language: MatchLevel,
    pub experience: MatchLevel,
    pub background: MatchLevel,
}

impl MatchDetails {
    pub const fn all(level: MatchLevel) -> Self {
        Self {
            gpa: level,
            language: level,
            experience: level,
            background: level,
        }
    }

    /// `(criterion label, level)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, MatchLevel); 4] {
        [
            ("GPA成绩", self.gpa),
            ("语言成绩", self.language),
            ("研究经验", self.experience),
            ("专业背景", self.background),
        ]
    }
}

/// A catalog entry describing one funding opportunity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: u32,
    pub name: String,
    pub university: String,
    pub country: String,
    /// Currency-tagged amount, e.g. `"£25,000/年"`.
    pub amount: String,
    /// Deadline as a calendar date string, e.g. `"2024年12月15日"`.
    pub deadline: String,
    /// Hardcoded 0–100 match rate.
    pub match_rate: u8,
    /// Category label ("全额奖学金", "部分奖学金", …).
    pub kind: String,
    pub requirements: Vec<String>,
    pub description: String,
    /// Application question prompts.
    pub questions: Vec<String>,
    pub required_documents: Vec<String>,
    #[serde(default)]
    pub is_recommended: bool,
    pub application_count: u32,
    pub view_count: u32,
    pub match_details: MatchDetails,
    pub eligibility_status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "已提交",
            ApplicationStatus::UnderReview => "审核中",
            ApplicationStatus::Approved => "已通过",
            ApplicationStatus::Rejected => "未通过",
        }
    }

    /// Progress bar value shown on the portal's application card.
    pub fn progress(self) -> u8 {
        match self {
            ApplicationStatus::Submitted => 25,
            ApplicationStatus::UnderReview => 50,
            ApplicationStatus::Approved | ApplicationStatus::Rejected => 100,
        }
    }
}

/// A submitted application. At most one exists per scholarship id per session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub scholarship: Scholarship,
    pub status: ApplicationStatus,
    /// zh-CN localized date, e.g. `"2024/11/17"`.
    pub submitted_date: String,
    pub application_id: String,
}

impl ApplicationRecord {
    /// A fresh `submitted` record dated `on`, with a newly generated id.
    pub fn submitted(scholarship: Scholarship, on: chrono::NaiveDate) -> Self {
        Self {
            scholarship,
            status: ApplicationStatus::Submitted,
            submitted_date: crate::derived::format_localized_date(on),
            application_id: new_application_id(),
        }
    }

    pub fn scholarship_id(&self) -> u32 {
        self.scholarship.id
    }
}

/// `APP-` followed by a UUID v4 in simple form.
pub fn new_application_id() -> String {
    format!("APP-{}", uuid::Uuid::new_v4().simple())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub school: String,
    pub degree: String,
    pub major: String,
    pub gpa: String,
    pub start: String,
    pub end: String,
}

impl EducationRecord {
    pub fn is_complete(&self) -> bool {
        [&self.school, &self.degree, &self.major, &self.gpa]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

impl AwardRecord {
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.issuer, &self.year]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Reference to an uploaded résumé. Only the file name is kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeRef {
    pub file_name: String,
}

/// Resume file names the intake and portal upload widgets accept.
pub fn is_supported_resume(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    [".pdf", ".doc", ".docx"].iter().any(|ext| lower.ends_with(ext))
}

/// The portal's editable profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub contact: ContactInfo,
    pub university: String,
    pub major: String,
    pub gpa: String,
    pub education: Vec<EducationRecord>,
    pub awards: Vec<AwardRecord>,
    pub resume: Option<ResumeRef>,
    pub personal_statement: String,
}

impl ProfileDraft {
    /// Seed a draft from whatever the session already knows about the user.
    pub fn seeded(user: Option<&SessionUser>, form: Option<&IntakeForm>) -> Self {
        let mut draft = ProfileDraft::default();
        if let Some(user) = user {
            draft.contact.name = user.name.clone();
            draft.contact.email = user.email.clone().unwrap_or_default();
        }
        if let Some(form) = form {
            if draft.contact.name.is_empty() {
                draft.contact.name = form.name.clone();
            }
            draft.gpa = form.gpa.clone();
            draft.major = form.major.map(|m| m.label().to_string()).unwrap_or_default();
        }
        draft
    }

    /// Drop the education row at `index`. Out-of-range indexes are ignored.
    pub fn remove_education(&mut self, index: usize) -> bool {
        if index < self.education.len() {
            self.education.remove(index);
            true
        } else {
            false
        }
    }

    /// Drop the award row at `index`. Out-of-range indexes are ignored.
    pub fn remove_award(&mut self, index: usize) -> bool {
        if index < self.awards.len() {
            self.awards.remove(index);
            true
        } else {
            false
        }
    }
}

/// A downloadable writing template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub category: String,
    pub downloads: u32,
    pub rating: f32,
    pub is_premium: bool,
    pub tags: Vec<String>,
    pub preview: String,
}

/// What the template boundary hands back for a download.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateDownload {
    pub file_name: String,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Deadline,
    Status,
    Recommendation,
    System,
}

impl NotificationKind {
    pub fn badge(self) -> &'static str {
        match self {
            NotificationKind::Deadline => "紧急",
            NotificationKind::Status => "状态",
            NotificationKind::Recommendation => "推荐",
            NotificationKind::System => "系统",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: String,
    pub read: bool,
    #[serde(default)]
    pub urgent: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuccessCase {
    pub name: String,
    pub scholarship: String,
    pub amount: String,
    pub major: String,
    pub country: String,
    pub year: String,
}

/// An entry in the portal's short template list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalTemplate {
    pub name: String,
    pub description: String,
    pub free: bool,
    /// Catalog template served on download. `None` for services.
    pub template_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_name_fallbacks() {
        let named = AuthResponse {
            name: Some("微信用户".into()),
            email: None,
            login_method: LoginMethod::WeChat,
            wechat_id: Some("wx_abc123xyz".into()),
            is_returning_user: false,
        };
        assert_eq!(SessionUser::from_auth(&named).name, "微信用户");

        let by_email = AuthResponse {
            name: None,
            email: Some("alice@example.com".into()),
            login_method: LoginMethod::Email,
            wechat_id: None,
            is_returning_user: false,
        };
        assert_eq!(SessionUser::from_auth(&by_email).name, "alice");

        let anonymous = AuthResponse {
            name: Some("  ".into()),
            email: None,
            login_method: LoginMethod::Email,
            wechat_id: None,
            is_returning_user: false,
        };
        assert_eq!(SessionUser::from_auth(&anonymous).name, "同学");
    }

    #[test]
    fn test_credentials_validation() {
        let empty = Credentials::Email { email: "   ".into() };
        assert_eq!(empty.validate(), Err(ValidationError::EmptyEmail));

        let bad = Credentials::Email { email: "nope".into() };
        assert!(matches!(bad.validate(), Err(ValidationError::InvalidEmail(_))));

        assert!(Credentials::Email { email: "a@b.com".into() }.validate().is_ok());
        assert!(Credentials::WeChat.validate().is_ok());
    }

    #[test]
    fn test_intake_validation_reports_first_gap() {
        let mut form = IntakeForm {
            name: "张三".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::UnansweredQuestion(IntakeQuestion::Education))
        );

        form.merge(&IntakeForm::returning_user_default(""));
        assert_eq!(form.name, "张三");
        assert!(form.is_complete());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_option_codes_roundtrip() {
        for e in Education::ALL {
            assert_eq!(Education::from_code(e.code()), Some(e));
        }
        for m in Major::ALL {
            assert_eq!(Major::from_code(m.code()), Some(m));
        }
        for c in TargetCountry::ALL {
            assert_eq!(TargetCountry::from_code(c.code()), Some(c));
        }
        assert_eq!(Major::from_code("astrology"), None);
    }

    #[test]
    fn test_resume_formats() {
        assert!(is_supported_resume("cv.PDF"));
        assert!(is_supported_resume("简历.docx"));
        assert!(!is_supported_resume("photo.png"));
    }

    #[test]
    fn test_profile_seeded_from_session() {
        let user = SessionUser {
            name: "alice".into(),
            email: Some("alice@example.com".into()),
            login_method: LoginMethod::Email,
            wechat_id: None,
        };
        let form = IntakeForm::returning_user_default("alice");
        let draft = ProfileDraft::seeded(Some(&user), Some(&form));
        assert_eq!(draft.contact.email, "alice@example.com");
        assert_eq!(draft.gpa, "3.5");
        assert_eq!(draft.major, "计算机科学");
    }

    #[test]
    fn test_removing_rows_twice_is_harmless() {
        let mut draft = ProfileDraft {
            education: vec![EducationRecord::default(), EducationRecord::default()],
            awards: vec![AwardRecord::default()],
            ..Default::default()
        };
        assert!(draft.remove_education(1));
        assert!(!draft.remove_education(1));
        assert_eq!(draft.education.len(), 1);

        assert!(draft.remove_award(0));
        assert!(!draft.remove_award(0));
        assert!(draft.awards.is_empty());
    }
}
