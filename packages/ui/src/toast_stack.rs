use dioxus::prelude::*;
use store::NoticeLevel;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation, FaXmark};
use crate::notices::{use_notices, Toast, TOAST_MS};
use crate::Icon;

const TOASTS_CSS: Asset = asset!("/assets/styling/toasts.css");

/// Bottom-right stack of live toasts, newest last.
#[component]
pub fn ToastStack() -> Element {
    let log = use_notices();
    let toasts = log().toasts.clone();

    rsx! {
        document::Stylesheet { href: TOASTS_CSS }

        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut log = use_notices();
    let id = toast.id;

    // Dropped with the component if the user closes the toast first.
    use_future(move || async move {
        api::delay::sleep_ms(TOAST_MS).await;
        log.write().dismiss(id);
    });

    let class = match toast.notice.level {
        NoticeLevel::Error => "toast error",
        NoticeLevel::Warning => "toast warning",
        NoticeLevel::Success => "toast success",
        NoticeLevel::Info => "toast info",
    };

    rsx! {
        div {
            class,
            span {
                class: "toast-icon",
                {match toast.notice.level {
                    NoticeLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
                    NoticeLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
                    NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                    NoticeLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                }}
            }
            div {
                class: "toast-body",
                div { class: "toast-title", "{toast.notice.title}" }
                if !toast.notice.description.is_empty() {
                    div { class: "toast-description", "{toast.notice.description}" }
                }
                span { class: "toast-time", "{toast.timestamp}" }
            }
            button {
                class: "toast-close",
                title: "关闭",
                onclick: move |_| log.write().dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
