use api::Backend;
use dioxus::prelude::*;
use store::models::PricingPlan;
use store::{catalog, Action, PendingKey};

use crate::components::{Badge, Button, ButtonVariant};
use crate::icons::{FaCheck, FaCrown, FaStar, FaWandMagicSparkles, FaXmark};
use crate::session::{use_backend, use_session};
use crate::views::ModalOverlay;
use crate::Icon;

/// Plan picker for the premium features. Closes itself after a successful subscription.
#[component]
pub fn PricingModal(on_close: EventHandler<()>) -> Element {
    let session = use_session();
    let backend = use_backend();
    let subscribing = session.is_pending(&PendingKey::Subscribe);

    let subscribe = use_callback(move |plan_id: String| {
        if !session.begin(PendingKey::Subscribe) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.subscribe(&plan_id).await;
            session.finish(&PendingKey::Subscribe);
            match result {
                Ok(plan) => {
                    session.dispatch(Action::Subscribe(plan.id));
                    on_close.call(());
                }
                Err(e) => session.fail(&e),
            }
        });
    });

    // Closing mid-request would drop the task and strand the pending key.
    let close = move |_: ()| {
        if !session.is_pending(&PendingKey::Subscribe) {
            on_close.call(());
        }
    };

    rsx! {
        ModalOverlay {
            on_close: close,
            width: "max-w-4xl",
            div {
                class: "p-8 relative",
                button {
                    class: "absolute top-4 right-4 text-neutral-400 hover:text-neutral-700",
                    onclick: move |_| close(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
                h2 { class: "text-2xl font-bold text-center mb-2", "选择您的AI助力计划" }
                p { class: "text-neutral-600 text-center", "解锁AI文书优化功能，让您的申请更出色" }

                div {
                    class: "grid md:grid-cols-3 gap-6 mt-8",
                    for plan in catalog::pricing_plans().iter().cloned() {
                        PlanCard {
                            key: "{plan.id}",
                            plan: plan.clone(),
                            disabled: subscribing,
                            on_subscribe: move |id| subscribe.call(id),
                        }
                    }
                }

                div {
                    class: "mt-8 text-center",
                    div {
                        class: "flex items-center justify-center gap-2 text-sm text-neutral-600 mb-4",
                        Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                        span { "所有计划都包含7天免费试用期" }
                    }
                    p { class: "text-xs text-neutral-500", "订阅后可随时取消，未使用的时间将按比例退款" }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: PricingPlan, disabled: bool, on_subscribe: EventHandler<String>) -> Element {
    let card_class = if plan.popular {
        "plan-card popular"
    } else {
        "plan-card"
    };
    let id = plan.id.clone();

    rsx! {
        div {
            class: card_class,
            if plan.popular {
                div {
                    class: "absolute -top-3 left-1/2 -translate-x-1/2",
                    Badge { class: "bg-gradient-to-r from-blue-600 to-purple-600 text-white px-4 py-1", "最受欢迎" }
                }
            }
            div {
                class: "text-center pb-4",
                div {
                    class: "flex justify-center mb-3",
                    if plan.popular {
                        Icon { icon: FaCrown, width: 24, height: 24, class: "text-purple-600" }
                    } else {
                        Icon { icon: FaStar, width: 24, height: 24, class: "text-neutral-600" }
                    }
                }
                h3 { class: "text-xl font-semibold", "{plan.name}" }
                div {
                    class: "flex items-baseline justify-center gap-1 mt-2",
                    span { class: "text-3xl font-bold text-neutral-900", "{plan.price}" }
                    span { class: "text-neutral-600", "{plan.period}" }
                }
                p { class: "text-sm text-neutral-600 mt-2", "{plan.description}" }
            }
            ul {
                class: "space-y-3 mb-6",
                for feature in plan.features.iter() {
                    li {
                        key: "{feature}",
                        class: "flex items-center gap-2",
                        Icon { icon: FaCheck, width: 14, height: 14, class: "text-green-500 flex-shrink-0" }
                        span { class: "text-sm text-neutral-700", "{feature}" }
                    }
                }
            }
            Button {
                variant: if plan.popular { ButtonVariant::Primary } else { ButtonVariant::Outline },
                class: "w-full",
                disabled,
                onclick: move |_| on_subscribe.call(id.clone()),
                "立即订阅"
            }
        }
    }
}
