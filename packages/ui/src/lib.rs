//! This crate contains all shared UI for the workspace.
//!
//! [`SessionProvider`] installs the session, backend, and config contexts;
//! [`Screens`] renders whichever page the session is on; [`ToastStack`] shows
//! the notices that transitions and failed boundary calls produce.

use dioxus::prelude::*;
use store::Page;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaWeixin;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod notices;
pub use notices::{push_notice, use_notices, NoticeLog, Toast};

mod session;
pub use session::{use_backend, use_config, use_session, Session, SessionProvider};

mod toast_stack;
pub use toast_stack::ToastStack;

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// The single-page shell: exactly one screen at a time, plus the floating user menu.
#[component]
pub fn Screens() -> Element {
    let session = use_session();
    let page = use_memo(move || session.state.read().page());

    // New screens start at the top. Only a page change re-runs this.
    use_effect(move || {
        let page = page();
        tracing::trace!(?page, "screen mounted");
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        {match page() {
            Page::Home => rsx! { views::HomeView {} },
            Page::Auth => rsx! { views::AuthView {} },
            Page::Form => rsx! { views::IntakeFormView {} },
            Page::Results => rsx! { views::ResultsView {} },
            Page::Details => rsx! { views::DetailsView {} },
            Page::Portal => rsx! { views::PortalView {} },
            Page::Templates => rsx! { views::TemplatesView {} },
        }}

        views::UserMenu {}
    }
}
