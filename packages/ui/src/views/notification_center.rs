use dioxus::prelude::*;
use store::models::{Notification, NotificationKind};
use store::Action;

use crate::components::{Badge, Button, ButtonVariant, Card};
use crate::icons::{FaAward, FaBell, FaCalendarDays, FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::session::use_session;
use crate::Icon;

/// Portal inbox: unread and urgent counters, mark read, dismiss.
#[component]
pub fn NotificationCenter() -> Element {
    let session = use_session();
    let state = session.state.read();
    let notifications = state.notifications().to_vec();
    let unread = state.unread_notifications();
    drop(state);
    let urgent = notifications.iter().filter(|n| n.urgent && !n.read).count();

    rsx! {
        Card {
            class: "p-6",
            div {
                class: "flex items-center justify-between mb-4",
                div {
                    class: "flex items-center gap-2 text-lg font-semibold",
                    Icon { icon: FaBell, width: 20, height: 20, class: "text-blue-600" }
                    "通知中心"
                    if unread > 0 {
                        Badge { class: "bg-red-600 text-white ml-2", "{unread}" }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    if urgent > 0 {
                        Badge { class: "bg-red-600 text-white animate-pulse", "{urgent} 紧急" }
                    }
                    if unread > 0 {
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "text-xs",
                            onclick: move |_| session.dispatch(Action::MarkAllNotificationsRead),
                            "全部已读"
                        }
                    }
                }
            }
            div {
                class: "space-y-4 max-h-96 overflow-y-auto",
                if notifications.is_empty() {
                    div {
                        class: "text-center py-8 text-neutral-500",
                        Icon { icon: FaBell, width: 48, height: 48, class: "mx-auto mb-4 text-neutral-300" }
                        p { "暂无通知" }
                    }
                }
                for notification in notifications {
                    NotificationItem { key: "{notification.id}", notification: notification.clone() }
                }
            }
        }
    }
}

#[component]
fn NotificationItem(notification: Notification) -> Element {
    let session = use_session();
    let read_id = notification.id.clone();
    let dismiss_id = notification.id.clone();
    let class = match (notification.urgent, notification.read) {
        (true, _) => "notification urgent",
        (false, true) => "notification read",
        (false, false) => "notification unread",
    };

    rsx! {
        div {
            class,
            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex items-start gap-3 flex-1",
                    {match notification.kind {
                        NotificationKind::Deadline => rsx! { Icon { icon: FaCalendarDays, width: 18, height: 18, class: "text-red-500" } },
                        NotificationKind::Status => rsx! { Icon { icon: FaCircleCheck, width: 18, height: 18, class: "text-blue-500" } },
                        NotificationKind::Recommendation => rsx! { Icon { icon: FaAward, width: 18, height: 18, class: "text-green-500" } },
                        NotificationKind::System => rsx! { Icon { icon: FaCircleExclamation, width: 18, height: 18, class: "text-yellow-500" } },
                    }}
                    div {
                        class: "flex-1",
                        div {
                            class: "flex items-center gap-2 mb-1",
                            h4 { class: "font-medium", "{notification.title}" }
                            Badge { class: "bg-neutral-100 text-neutral-700", "{notification.kind.badge()}" }
                            if notification.urgent {
                                Badge { class: "bg-red-600 text-white animate-pulse", "紧急" }
                            }
                        }
                        p { class: "text-sm", "{notification.message}" }
                        p { class: "text-xs text-neutral-400 mt-1", "{notification.date}" }
                    }
                }
                div {
                    class: "flex items-center gap-1",
                    if !notification.read {
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "text-xs",
                            onclick: move |_| session.dispatch(Action::MarkNotificationRead(read_id.clone())),
                            "标为已读"
                        }
                    }
                    button {
                        class: "p-1 text-neutral-400 hover:text-neutral-700",
                        title: "删除",
                        onclick: move |_| session.dispatch(Action::DismissNotification(dismiss_id.clone())),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
