use dioxus::prelude::*;
use store::derived::{convert_with, days_left, star_rating};
use store::Scholarship;

use crate::components::{Badge, Button, ButtonVariant};
use crate::icons::{FaCalendarDays, FaEye, FaHeart, FaLocationDot, FaStar, FaTrophy, FaUsers};
use crate::session::use_config;
use crate::views::MatchBadge;
use crate::Icon;

/// One result card. `slogan` is shown under the title on recommended cards.
#[component]
pub fn ScholarshipCard(
    scholarship: Scholarship,
    saved: bool,
    #[props(default)] slogan: Option<String>,
    on_toggle_save: EventHandler<Scholarship>,
    on_view_details: EventHandler<Scholarship>,
) -> Element {
    let s = scholarship.clone();
    let days = days_left(&s.deadline);
    let stars = star_rating(s.match_rate);
    let rmb = convert_with(&s.amount, &use_config().currency);
    let card_class = if s.is_recommended {
        "scholarship-card recommended"
    } else {
        "scholarship-card"
    };
    let heart_class = if saved { "text-red-500" } else { "text-neutral-400" };

    let save_target = scholarship.clone();
    let details_target = scholarship.clone();

    rsx! {
        div {
            class: card_class,
            button {
                class: "save-toggle",
                title: if saved { "取消收藏" } else { "收藏" },
                onclick: move |_| on_toggle_save.call(save_target.clone()),
                Icon { icon: FaHeart, width: 18, height: 18, class: "{heart_class}" }
            }

            div {
                class: "flex justify-between items-start pr-12",
                div {
                    class: "flex-1",
                    div {
                        class: "flex items-center gap-3 mb-2 flex-wrap",
                        if s.is_recommended {
                            Icon { icon: FaTrophy, width: 20, height: 20, class: "text-yellow-500" }
                        }
                        h3 { class: "text-xl font-semibold", "{s.name}" }
                        MatchBadge { match_rate: s.match_rate, details: s.match_details }
                        if s.is_recommended {
                            Badge { class: "bg-yellow-500 text-white", "推荐" }
                        }
                    }
                    if let Some(slogan) = slogan {
                        div { class: "text-sm text-yellow-700 mb-2 italic", "{slogan}" }
                    }
                    div {
                        class: "flex items-center gap-4 text-neutral-600 mb-2",
                        span {
                            class: "flex items-center gap-1",
                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                            "{s.university} • {s.country}"
                        }
                        Badge { class: "border border-neutral-300", "{s.kind}" }
                    }
                    div {
                        class: "flex items-center gap-4 text-sm text-neutral-500",
                        span {
                            class: "flex items-center gap-1",
                            Icon { icon: FaUsers, width: 12, height: 12 }
                            "本月已有{s.application_count}人申请"
                        }
                        span {
                            class: "flex items-center gap-1",
                            Icon { icon: FaEye, width: 12, height: 12 }
                            "浏览量：{s.view_count}+"
                        }
                    }
                }
                div {
                    class: "text-right",
                    div { class: "text-2xl font-bold text-green-600", "{s.amount}" }
                    div { class: "text-sm text-green-500", "{rmb}" }
                    div { class: "text-xs text-neutral-500", "每年" }
                }
            }

            p { class: "text-neutral-700 my-4", "{s.description}" }

            div {
                class: "eligibility",
                "申请资格评估: {s.eligibility_status}"
            }

            div {
                class: "grid md:grid-cols-2 gap-6 mb-6",
                div {
                    h4 {
                        class: "font-semibold mb-2 flex items-center gap-2",
                        Icon { icon: FaCalendarDays, width: 14, height: 14, class: "text-red-500" }
                        "申请截止日期"
                    }
                    p { class: "text-red-600 font-medium", "{s.deadline}" }
                }
                div {
                    h4 { class: "font-semibold mb-2", "申请要求" }
                    div {
                        class: "flex flex-wrap gap-2",
                        for req in s.requirements.iter() {
                            Badge { key: "{req}", class: "bg-neutral-100 text-neutral-700", "{req}" }
                        }
                    }
                }
            }

            div {
                class: "flex justify-between items-center pt-4 border-t border-neutral-200",
                div {
                    class: "flex items-center gap-1",
                    for i in 0..5u8 {
                        Icon {
                            key: "{i}",
                            icon: FaStar,
                            width: 14,
                            height: 14,
                            class: if i < stars { "text-yellow-400".to_string() } else { "text-neutral-300".to_string() },
                        }
                    }
                    span { class: "text-sm text-neutral-600 ml-2", "匹配度评分" }
                }
                Button {
                    variant: if s.is_recommended { ButtonVariant::Primary } else { ButtonVariant::Outline },
                    onclick: move |_| on_view_details.call(details_target.clone()),
                    "立即申请 (剩{days}天)"
                }
            }
        }
    }
}
