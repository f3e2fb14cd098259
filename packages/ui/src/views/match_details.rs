use dioxus::prelude::*;
use store::models::{MatchDetails, MatchLevel};

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleXmark};
use crate::Icon;

/// `"95% 匹配"` badge that reveals the per-criterion breakdown on hover.
#[component]
pub fn MatchBadge(match_rate: u8, details: MatchDetails) -> Element {
    let mut open = use_signal(|| false);
    let tier = store::derived::match_tier(match_rate).css_class();

    rsx! {
        span {
            class: "match-badge {tier}",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            "{match_rate}% 匹配"

            if open() {
                div {
                    class: "match-details-card",
                    h4 { "匹配度详情" }
                    for (label, level) in details.rows() {
                        div {
                            key: "{label}",
                            class: "match-details-row",
                            {match level {
                                MatchLevel::Match => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14, class: "text-green-500" } },
                                MatchLevel::Partial => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14, class: "text-yellow-500" } },
                                MatchLevel::Miss => rsx! { Icon { icon: FaCircleXmark, width: 14, height: 14, class: "text-red-500" } },
                            }}
                            span { "{label}: {level.label()}" }
                        }
                    }
                }
            }
        }
    }
}
