pub mod catalog;
pub mod clock;
pub mod config;
pub mod derived;
pub mod error;
pub mod loader;
pub mod models;
pub mod pending;
pub mod state;

pub use config::ScholarMatchConfig;
pub use error::ValidationError;
pub use loader::{LoaderProgress, Tick};
pub use models::{
    ApplicationRecord, ApplicationStatus, AuthResponse, Credentials, IntakeForm, IntakeQuestion,
    LoginMethod, Page, ProfileDraft, Scholarship, SessionUser,
};
pub use pending::{PendingActions, PendingKey};
pub use state::{Action, AppState, Notice, NoticeLevel};
