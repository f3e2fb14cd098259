//! # Session state machine
//!
//! [`AppState`] is the single writer for everything that crosses screens: the
//! visible [`Page`], the signed-in user, the intake answers, the selected
//! scholarship, the saved set, the application records, and the portal profile.
//! Views never mutate it directly; they send an [`Action`] to
//! [`AppState::dispatch`] and render whatever state results.
//!
//! ## Transitions
//!
//! | From | Action | To |
//! |------|--------|----|
//! | home | `StartMatching` | auth |
//! | auth | `CompleteAuth` (new user) | form |
//! | auth | `CompleteAuth` (returning user) | results, marks results visited |
//! | form | `SubmitForm` | results, marks results visited |
//! | results | `ViewDetails` | details |
//! | details | `BackToResults` | results |
//! | results / details / portal | `OpenPortal` | portal |
//! | portal | `BackFromPortal` | results if visited, else home |
//! | home | `OpenTemplates` | templates |
//! | anywhere | `ReturnHome` / `Navigate(Home)` | home, session reset |
//!
//! `ToggleSave`, `ApplyOneClick` and the portal actions never change the page.
//!
//! Every dispatch may yield a [`Notice`] the UI shows as a toast.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::clock;
use crate::models::{
    ApplicationRecord, ApplicationStatus, AuthResponse, IntakeForm, LoginMethod, Notification,
    Page, ProfileDraft, Scholarship, SessionUser,
};
use crate::pending::{PendingActions, PendingKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient, user-visible message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, description)
    }
}

/// Everything a view can ask the controller to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    StartMatching,
    CompleteAuth(AuthResponse),
    SubmitForm(IntakeForm),
    ViewDetails(Scholarship),
    BackToResults,
    ToggleSave(Scholarship),
    ApplyOneClick(Scholarship),
    /// Store a record produced by the application boundary.
    RecordApplication(ApplicationRecord),
    OpenPortal,
    BackFromPortal,
    OpenTemplates,
    ReturnHome,
    Navigate(Page),
    LoaderFinished,
    UpdateProfile(ProfileDraft),
    MarkNotificationRead(String),
    MarkAllNotificationsRead,
    DismissNotification(String),
    Subscribe(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    page: Page,
    user: Option<SessionUser>,
    form_data: Option<IntakeForm>,
    selected: Option<Scholarship>,
    has_visited_results: bool,
    loader_pending: bool,
    saved: Vec<Scholarship>,
    applied: Vec<ApplicationRecord>,
    profile: Option<ProfileDraft>,
    notifications: Vec<Notification>,
    premium_plan: Option<String>,
    pending: PendingActions,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: Page::Home,
            user: None,
            form_data: None,
            selected: None,
            has_visited_results: false,
            loader_pending: false,
            saved: Vec::new(),
            applied: Vec::new(),
            profile: None,
            notifications: catalog::notifications(),
            premium_plan: None,
            pending: PendingActions::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn form_data(&self) -> Option<&IntakeForm> {
        self.form_data.as_ref()
    }

    pub fn selected_scholarship(&self) -> Option<&Scholarship> {
        self.selected.as_ref()
    }

    pub fn has_visited_results(&self) -> bool {
        self.has_visited_results
    }

    /// Whether the results page should open with the matching loader.
    pub fn show_initial_loader(&self) -> bool {
        self.loader_pending
    }

    pub fn saved(&self) -> &[Scholarship] {
        &self.saved
    }

    pub fn applied(&self) -> &[ApplicationRecord] {
        &self.applied
    }

    pub fn is_saved(&self, id: u32) -> bool {
        self.saved.iter().any(|s| s.id == id)
    }

    pub fn is_applied(&self, id: u32) -> bool {
        self.applied.iter().any(|a| a.scholarship_id() == id)
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn approved_count(&self) -> usize {
        self.applied
            .iter()
            .filter(|a| a.status == ApplicationStatus::Approved)
            .count()
    }

    /// The user menu is only shown to a signed-in user on the browsing screens.
    pub fn show_user_menu(&self) -> bool {
        self.user.is_some() && matches!(self.page, Page::Results | Page::Details | Page::Portal)
    }

    /// The portal profile, seeded from the session on first access.
    pub fn profile(&self) -> ProfileDraft {
        self.profile.clone().unwrap_or_else(|| {
            ProfileDraft::seeded(self.user.as_ref(), self.form_data.as_ref())
        })
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn has_premium(&self) -> bool {
        self.premium_plan.is_some()
    }

    pub fn premium_plan(&self) -> Option<&str> {
        self.premium_plan.as_deref()
    }

    /// Claim `key` for a simulated round-trip. `false` means it is already running.
    pub fn try_begin(&mut self, key: PendingKey) -> bool {
        let started = self.pending.try_begin(key.clone());
        if !started {
            tracing::debug!(?key, "ignoring re-entrant action");
        }
        started
    }

    pub fn finish(&mut self, key: &PendingKey) {
        self.pending.finish(key);
    }

    pub fn is_pending(&self, key: &PendingKey) -> bool {
        self.pending.is_pending(key)
    }

    /// Apply `action` using the current local date.
    pub fn dispatch(&mut self, action: Action) -> Option<Notice> {
        self.dispatch_on(action, clock::today())
    }

    /// Apply `action`, dating any new application record `today`.
    pub fn dispatch_on(&mut self, action: Action, today: NaiveDate) -> Option<Notice> {
        let from = self.page;
        let notice = self.reduce(action, today);
        if from != self.page {
            tracing::debug!(?from, to = ?self.page, "page transition");
            // Round-trips belong to the screen that started them.
            self.pending.clear();
        }
        notice
    }

    fn reduce(&mut self, action: Action, today: NaiveDate) -> Option<Notice> {
        match action {
            Action::StartMatching => {
                self.page = Page::Auth;
                None
            }
            Action::CompleteAuth(auth) => self.complete_auth(auth),
            Action::SubmitForm(form) => {
                self.loader_pending = !self.has_visited_results;
                self.form_data = Some(form);
                self.has_visited_results = true;
                self.page = Page::Results;
                None
            }
            Action::ViewDetails(scholarship) => {
                self.selected = Some(scholarship);
                self.page = Page::Details;
                None
            }
            Action::BackToResults => {
                self.selected = None;
                self.page = Page::Results;
                None
            }
            Action::ToggleSave(scholarship) => {
                self.toggle_save(scholarship);
                None
            }
            Action::ApplyOneClick(scholarship) => {
                if self.is_applied(scholarship.id) {
                    return Some(Notice::info(
                        "已申请",
                        format!("您已经申请过 {}", scholarship.name),
                    ));
                }
                let record = ApplicationRecord::submitted(scholarship, today);
                self.record_application(record)
            }
            Action::RecordApplication(record) => {
                if self.is_applied(record.scholarship_id()) {
                    return Some(Notice::info(
                        "已申请",
                        format!("您已经申请过 {}", record.scholarship.name),
                    ));
                }
                self.record_application(record)
            }
            Action::OpenPortal => {
                if matches!(self.page, Page::Results | Page::Details | Page::Portal) {
                    self.page = Page::Portal;
                } else {
                    tracing::debug!(page = ?self.page, "portal icon is not shown here");
                }
                None
            }
            Action::BackFromPortal => {
                self.page = if self.has_visited_results {
                    Page::Results
                } else {
                    Page::Home
                };
                None
            }
            Action::OpenTemplates => {
                self.page = Page::Templates;
                None
            }
            Action::ReturnHome | Action::Navigate(Page::Home) => {
                self.reset_session();
                None
            }
            Action::Navigate(Page::Details) if self.selected.is_none() => {
                tracing::warn!("details requested without a selected scholarship");
                None
            }
            Action::Navigate(page) => {
                self.page = page;
                None
            }
            Action::LoaderFinished => {
                self.loader_pending = false;
                None
            }
            Action::UpdateProfile(profile) => {
                self.profile = Some(profile);
                Some(Notice::success("保存成功", "个人信息已更新"))
            }
            Action::MarkNotificationRead(id) => {
                if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
                    n.read = true;
                }
                None
            }
            Action::MarkAllNotificationsRead => {
                for n in &mut self.notifications {
                    n.read = true;
                }
                None
            }
            Action::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
                None
            }
            Action::Subscribe(plan_id) => match catalog::find_plan(&plan_id) {
                Some(plan) => {
                    self.premium_plan = Some(plan.id.clone());
                    Some(Notice::success("订阅成功", format!("已开通{}", plan.name)))
                }
                None => Some(Notice::error("订阅失败", format!("未知的套餐: {plan_id}"))),
            },
        }
    }

    fn complete_auth(&mut self, auth: AuthResponse) -> Option<Notice> {
        let user = SessionUser::from_auth(&auth);
        tracing::info!(method = ?user.login_method, returning = auth.is_returning_user, "signed in");

        if auth.is_returning_user {
            self.form_data = Some(IntakeForm::returning_user_default(&user.name));
            self.user = Some(user);
            self.has_visited_results = true;
            self.loader_pending = false;
            self.page = Page::Results;
            Some(Notice::success(
                "欢迎回来！",
                "正在为您加载个性化的奖学金推荐...",
            ))
        } else {
            let title = match user.login_method {
                LoginMethod::Email => "登录成功",
                LoginMethod::WeChat => "微信登录成功",
            };
            self.user = Some(user);
            self.page = Page::Form;
            Some(Notice::success(title, "欢迎使用奖学金匹配平台！"))
        }
    }

    fn toggle_save(&mut self, scholarship: Scholarship) {
        if let Some(pos) = self.saved.iter().position(|s| s.id == scholarship.id) {
            self.saved.remove(pos);
        } else {
            self.saved.push(scholarship);
        }
    }

    fn record_application(&mut self, record: ApplicationRecord) -> Option<Notice> {
        let name = record.scholarship.name.clone();
        tracing::info!(
            scholarship = record.scholarship_id(),
            application = %record.application_id,
            "application submitted"
        );
        self.applied.push(record);
        Some(Notice::success(
            "申请已成功提交！",
            format!("您已成功申请 {name}"),
        ))
    }

    fn reset_session(&mut self) {
        self.page = Page::Home;
        self.user = None;
        self.form_data = None;
        self.selected = None;
        self.has_visited_results = false;
        self.loader_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 17).unwrap()
    }

    fn scholarship(id: u32) -> Scholarship {
        catalog::find_scholarship(id).unwrap().clone()
    }

    fn new_user() -> AuthResponse {
        AuthResponse {
            name: None,
            email: Some("new@example.com".into()),
            login_method: LoginMethod::Email,
            wechat_id: None,
            is_returning_user: false,
        }
    }

    fn returning_user() -> AuthResponse {
        AuthResponse {
            email: Some("a@b.com".into()),
            is_returning_user: true,
            ..new_user()
        }
    }

    fn at_results() -> AppState {
        let mut state = AppState::new();
        state.dispatch_on(Action::StartMatching, day());
        state.dispatch_on(Action::CompleteAuth(new_user()), day());
        state.dispatch_on(
            Action::SubmitForm(IntakeForm::returning_user_default("new")),
            day(),
        );
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.page(), Page::Home);
        assert!(state.user().is_none());
        assert!(!state.has_visited_results());
        assert!(!state.show_user_menu());
    }

    #[test]
    fn test_new_user_goes_through_form() {
        let mut state = AppState::new();
        state.dispatch_on(Action::StartMatching, day());
        assert_eq!(state.page(), Page::Auth);

        state.dispatch_on(Action::CompleteAuth(new_user()), day());
        assert_eq!(state.page(), Page::Form);
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("new"));
        assert!(!state.has_visited_results());

        state.dispatch_on(
            Action::SubmitForm(IntakeForm::returning_user_default("new")),
            day(),
        );
        assert_eq!(state.page(), Page::Results);
        assert!(state.has_visited_results());
        assert!(state.show_initial_loader());

        state.dispatch_on(Action::LoaderFinished, day());
        assert!(!state.show_initial_loader());
    }

    #[test]
    fn test_returning_user_skips_form() {
        let mut state = AppState::new();
        state.dispatch_on(Action::StartMatching, day());
        let notice = state.dispatch_on(Action::CompleteAuth(returning_user()), day());

        assert_eq!(state.page(), Page::Results);
        assert!(state.has_visited_results());
        assert!(!state.show_initial_loader());
        let form = state.form_data().unwrap();
        assert_eq!(form.name, "a");
        assert_eq!(form.gpa, "3.5");
        assert_eq!(notice.map(|n| n.title), Some("欢迎回来！".to_string()));
    }

    #[test]
    fn test_loader_shown_once_per_session() {
        let mut state = at_results();
        state.dispatch_on(Action::LoaderFinished, day());
        state.dispatch_on(Action::Navigate(Page::Form), day());
        state.dispatch_on(
            Action::SubmitForm(IntakeForm::returning_user_default("again")),
            day(),
        );
        assert!(!state.show_initial_loader());
    }

    #[test]
    fn test_toggle_save_parity() {
        let mut state = AppState::new();
        let s = scholarship(2);
        for n in 1..=7 {
            state.dispatch_on(Action::ToggleSave(s.clone()), day());
            assert_eq!(state.is_saved(2), n % 2 == 1, "after {n} toggles");
            assert!(state.saved_count() <= 1);
        }
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_toggle_save_keeps_others() {
        let mut state = AppState::new();
        state.dispatch_on(Action::ToggleSave(scholarship(1)), day());
        state.dispatch_on(Action::ToggleSave(scholarship(3)), day());
        state.dispatch_on(Action::ToggleSave(scholarship(1)), day());
        assert!(!state.is_saved(1));
        assert!(state.is_saved(3));
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let mut state = at_results();
        let s = scholarship(6);

        let first = state.dispatch_on(Action::ApplyOneClick(s.clone()), day());
        assert_eq!(first.map(|n| n.level), Some(NoticeLevel::Success));
        let id = state.applied()[0].application_id.clone();

        let second = state.dispatch_on(Action::ApplyOneClick(s), day());
        assert_eq!(second.map(|n| n.level), Some(NoticeLevel::Info));
        assert_eq!(state.applied_count(), 1);
        assert_eq!(state.applied()[0].application_id, id);

        let record = &state.applied()[0];
        assert_eq!(record.status, ApplicationStatus::Submitted);
        assert_eq!(record.submitted_date, "2024/11/17");
        assert!(record.application_id.starts_with("APP-"));
    }

    #[test]
    fn test_application_ids_are_unique() {
        let mut state = AppState::new();
        for id in 1..=5 {
            state.dispatch_on(Action::ApplyOneClick(scholarship(id)), day());
        }
        let mut ids: Vec<_> = state.applied().iter().map(|a| a.application_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_recorded_application_respects_uniqueness() {
        let mut state = AppState::new();
        state.dispatch_on(Action::ApplyOneClick(scholarship(4)), day());
        let duplicate = ApplicationRecord::submitted(scholarship(4), day());
        state.dispatch_on(Action::RecordApplication(duplicate), day());
        assert_eq!(state.applied_count(), 1);
    }

    #[test]
    fn test_return_home_resets_session() {
        let mut state = at_results();
        state.dispatch_on(Action::ViewDetails(scholarship(1)), day());
        state.dispatch_on(Action::OpenPortal, day());
        state.dispatch_on(Action::ReturnHome, day());

        assert_eq!(state.page(), Page::Home);
        assert!(state.user().is_none());
        assert!(state.form_data().is_none());
        assert!(state.selected_scholarship().is_none());
        assert!(!state.has_visited_results());
    }

    #[test]
    fn test_navigate_home_is_return_home() {
        let mut a = at_results();
        let mut b = a.clone();
        a.dispatch_on(Action::ReturnHome, day());
        b.dispatch_on(Action::Navigate(Page::Home), day());
        assert_eq!(a, b);
    }

    #[test]
    fn test_details_round_trip() {
        let mut state = at_results();
        state.dispatch_on(Action::ViewDetails(scholarship(5)), day());
        assert_eq!(state.page(), Page::Details);
        assert_eq!(state.selected_scholarship().map(|s| s.id), Some(5));
        assert!(state.show_user_menu());

        state.dispatch_on(Action::BackToResults, day());
        assert_eq!(state.page(), Page::Results);
        assert!(state.selected_scholarship().is_none());
    }

    #[test]
    fn test_details_requires_selection() {
        let mut state = AppState::new();
        state.dispatch_on(Action::Navigate(Page::Details), day());
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_portal_back_goes_to_results_after_visit() {
        let mut state = at_results();
        state.dispatch_on(Action::OpenPortal, day());
        assert_eq!(state.page(), Page::Portal);
        state.dispatch_on(Action::BackFromPortal, day());
        assert_eq!(state.page(), Page::Results);
    }

    #[test]
    fn test_portal_back_goes_home_on_fresh_session() {
        let mut state = AppState::new();
        state.dispatch_on(Action::Navigate(Page::Portal), day());
        assert_eq!(state.page(), Page::Portal);
        state.dispatch_on(Action::BackFromPortal, day());
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_portal_icon_only_from_browsing_screens() {
        let mut state = AppState::new();
        state.dispatch_on(Action::OpenPortal, day());
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_templates_and_back() {
        let mut state = AppState::new();
        state.dispatch_on(Action::OpenTemplates, day());
        assert_eq!(state.page(), Page::Templates);
        state.dispatch_on(Action::ReturnHome, day());
        assert_eq!(state.page(), Page::Home);
    }

    #[test]
    fn test_saved_and_applied_survive_return_home() {
        let mut state = at_results();
        state.dispatch_on(Action::ToggleSave(scholarship(2)), day());
        state.dispatch_on(Action::ApplyOneClick(scholarship(2)), day());
        state.dispatch_on(Action::ReturnHome, day());
        assert!(state.is_saved(2));
        assert!(state.is_applied(2));
    }

    #[test]
    fn test_profile_seeded_then_kept() {
        let mut state = at_results();
        let mut profile = state.profile();
        assert_eq!(profile.contact.email, "new@example.com");

        profile.contact.phone = "+86 138****8888".into();
        state.dispatch_on(Action::UpdateProfile(profile.clone()), day());
        assert_eq!(state.profile(), profile);
    }

    #[test]
    fn test_notifications() {
        let mut state = AppState::new();
        assert_eq!(state.unread_notifications(), 2);
        state.dispatch_on(Action::MarkNotificationRead("1".into()), day());
        assert_eq!(state.unread_notifications(), 1);
        state.dispatch_on(Action::DismissNotification("2".into()), day());
        assert_eq!(state.unread_notifications(), 0);
        assert_eq!(state.notifications().len(), 3);
    }

    #[test]
    fn test_subscribe() {
        let mut state = AppState::new();
        let notice = state.dispatch_on(Action::Subscribe("gold".into()), day());
        assert_eq!(notice.map(|n| n.level), Some(NoticeLevel::Error));
        assert!(!state.has_premium());

        state.dispatch_on(Action::Subscribe("premium".into()), day());
        assert_eq!(state.premium_plan(), Some("premium"));
    }

    #[test]
    fn test_pending_guard() {
        let mut state = AppState::new();
        assert!(state.try_begin(PendingKey::Authenticate));
        assert!(!state.try_begin(PendingKey::Authenticate));
        state.finish(&PendingKey::Authenticate);
        assert!(!state.is_pending(&PendingKey::Authenticate));
    }

    #[test]
    fn test_leaving_a_screen_abandons_its_round_trips() {
        let mut state = AppState::new();
        state.dispatch_on(Action::StartMatching, day());
        assert!(state.try_begin(PendingKey::Authenticate));

        state.dispatch_on(Action::ToggleSave(scholarship(1)), day());
        assert!(state.is_pending(&PendingKey::Authenticate));

        state.dispatch_on(Action::ReturnHome, day());
        assert!(!state.is_pending(&PendingKey::Authenticate));
    }

    #[test]
    fn test_in_page_actions_keep_the_page() {
        let mut state = at_results();
        state.dispatch_on(Action::LoaderFinished, day());
        let s = scholarship(3);
        let in_page = [
            Action::ToggleSave(s.clone()),
            Action::ApplyOneClick(s.clone()),
            Action::ToggleSave(s),
            Action::MarkAllNotificationsRead,
        ];
        for action in in_page {
            state.dispatch_on(action, day());
            assert_eq!(state.page(), Page::Results);
        }
        assert!(state.try_begin(PendingKey::SubmitApplication(3)));
        state.finish(&PendingKey::SubmitApplication(3));
        assert_eq!(state.page(), Page::Results);
    }
}
