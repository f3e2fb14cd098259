use dioxus::prelude::*;
use store::Action;

use crate::icons::{FaFileLines, FaHeart, FaUser};
use crate::session::use_session;
use crate::Icon;

/// Floating avatar button with saved and applied counters. Opens the portal.
#[component]
pub fn UserMenu() -> Element {
    let session = use_session();
    let state = session.state.read();
    if !state.show_user_menu() {
        return rsx! {};
    }
    let saved = state.saved_count();
    let applied = state.applied_count();
    let unread = state.unread_notifications();
    drop(state);

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50",
            button {
                class: "user-menu",
                title: "用户中心",
                onclick: move |_| session.dispatch(Action::OpenPortal),
                span {
                    class: "user-avatar",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    if unread > 0 {
                        span { class: "unread-dot" }
                    }
                }
                span {
                    class: "flex items-center gap-1",
                    Icon { icon: FaHeart, width: 14, height: 14, class: "text-red-500" }
                    span { class: "counter bg-red-100 text-red-700", "{saved}" }
                }
                span {
                    class: "flex items-center gap-1",
                    Icon { icon: FaFileLines, width: 14, height: 14, class: "text-blue-500" }
                    span { class: "counter bg-blue-100 text-blue-700", "{applied}" }
                }
            }
        }
    }
}
