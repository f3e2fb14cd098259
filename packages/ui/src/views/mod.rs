mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod match_details;
pub use match_details::MatchBadge;

mod scholarship_card;
pub use scholarship_card::ScholarshipCard;

mod pricing_modal;
pub use pricing_modal::PricingModal;

mod home;
pub use home::HomeView;

mod auth;
pub use auth::AuthView;

mod intake_form;
pub use intake_form::IntakeFormView;

mod matching_loader;
pub use matching_loader::MatchingLoader;

mod results;
pub use results::{ApplicationProgressCard, EmptyState, ResultsView};

mod details;
pub use details::DetailsView;

mod notification_center;
pub use notification_center::NotificationCenter;

mod portal;
pub use portal::PortalView;

mod templates;
pub use templates::TemplatesView;

mod user_menu;
pub use user_menu::UserMenu;
