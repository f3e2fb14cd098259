use dioxus::prelude::*;
use store::derived::{convert_with, days_left};
use store::{catalog, Action, Scholarship};

use crate::components::{Badge, Button};
use crate::icons::{
    FaArrowRight, FaCalendarDays, FaFileLines, FaGraduationCap, FaHeart, FaLocationDot, FaStar,
};
use crate::session::{use_config, use_session};
use crate::Icon;

/// Landing page: hero, stats, featured scholarships, template link, success cases.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let cases = catalog::success_cases();

    rsx! {
        div {
            class: "page-bg",
            div {
                class: "container mx-auto px-4 py-16",

                div {
                    class: "text-center mb-20 pt-12",
                    div {
                        class: "flex justify-center mb-8",
                        div {
                            class: "hero-icon",
                            Icon { icon: FaGraduationCap, width: 64, height: 64, class: "text-white" }
                        }
                    }
                    h1 { class: "text-5xl font-bold text-neutral-900 mb-8", "我们帮你发现那些原本以为遥不可及的奖学金" }
                    p {
                        class: "text-2xl text-neutral-600 mb-12 max-w-4xl mx-auto",
                        "智能推荐 • 一键申请 • 申请进度追踪"
                        br {}
                        "让每一份努力都能找到属于它的奖励"
                    }
                    Button {
                        class: "hero-cta",
                        onclick: move |_| session.dispatch(Action::StartMatching),
                        "注册后解锁你的专属奖学金匹配"
                        Icon { icon: FaArrowRight, width: 20, height: 20 }
                    }
                }

                div {
                    class: "stats-card",
                    for (value, label, color) in [
                        ("1000+", "奖学金项目", "text-blue-600"),
                        ("50+", "合作院校", "text-green-600"),
                        ("10000+", "成功匹配", "text-purple-600"),
                        ("95%", "满意度", "text-orange-600"),
                    ] {
                        div {
                            key: "{label}",
                            div { class: "text-4xl font-bold mb-3 {color}", "{value}" }
                            div { class: "text-neutral-600 text-lg", "{label}" }
                        }
                    }
                }

                FeaturedScholarships {}

                div {
                    class: "template-teaser",
                    Icon { icon: FaFileLines, width: 64, height: 64, class: "text-purple-600 mx-auto mb-4" }
                    h3 { class: "text-2xl font-bold mb-4", "文书模板中心" }
                    p {
                        class: "text-neutral-600 mb-6",
                        "不知道怎么写文书？我们先帮你起个头！"
                        br {}
                        "个人陈述、推荐信模板免费下载，付费用户可请求文书定制修改"
                    }
                    Button {
                        class: "bg-purple-600 hover:bg-purple-700",
                        onclick: move |_| session.dispatch(Action::OpenTemplates),
                        "浏览模板中心"
                        Icon { icon: FaArrowRight, width: 16, height: 16 }
                    }
                }

                div {
                    class: "mb-20",
                    h2 { class: "text-4xl font-bold text-center mb-4", "成功案例" }
                    p { class: "text-xl text-neutral-600 text-center mb-12", "看看他们如何通过我们的平台获得理想奖学金" }
                    div {
                        class: "grid md:grid-cols-4 gap-6",
                        for case in cases {
                            div {
                                key: "{case.name}",
                                class: "success-card",
                                div {
                                    class: "avatar",
                                    "{case.name.chars().next().unwrap_or('学')}"
                                    span {
                                        class: "avatar-star",
                                        Icon { icon: FaStar, width: 12, height: 12, class: "text-white" }
                                    }
                                }
                                h3 { class: "text-lg font-semibold mb-2", "{case.name}" }
                                p { class: "text-sm text-blue-600 font-medium mb-2", "{case.scholarship}" }
                                div { class: "text-2xl font-bold text-green-600 mb-3", "{case.amount}" }
                                div {
                                    class: "text-xs text-neutral-500 space-y-1",
                                    div { class: "flex items-center justify-center gap-1",
                                        Icon { icon: FaGraduationCap, width: 12, height: 12 }
                                        "{case.major}"
                                    }
                                    div { class: "flex items-center justify-center gap-1",
                                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                                        "{case.country}"
                                    }
                                    div { class: "flex items-center justify-center gap-1",
                                        Icon { icon: FaCalendarDays, width: 12, height: 12 }
                                        "{case.year}年获得"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "cta-banner",
                    h2 { class: "text-4xl font-bold mb-6", "开启您的留学之旅" }
                    p { class: "text-xl mb-8", "立即开始奖学金匹配，找到最适合您的海外学习机会" }
                    button {
                        class: "cta-button",
                        onclick: move |_| session.dispatch(Action::StartMatching),
                        "立即开始"
                        Icon { icon: FaArrowRight, width: 20, height: 20 }
                    }
                }
            }
        }
    }
}

/// The three highlighted catalog entries on the landing page.
#[component]
fn FeaturedScholarships() -> Element {
    let session = use_session();
    let featured = catalog::featured_scholarships();

    rsx! {
        div {
            class: "mb-20",
            h2 { class: "text-4xl font-bold text-center mb-4", "精选奖学金" }
            p { class: "text-xl text-neutral-600 text-center mb-12", "这些可能正是你在寻找的机会，不要让它们溜走！" }
            div {
                class: "grid md:grid-cols-3 gap-6",
                for s in featured {
                    FeaturedCard {
                        key: "{s.id}",
                        saved: session.state.read().is_saved(s.id),
                        scholarship: s.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedCard(scholarship: Scholarship, saved: bool) -> Element {
    let session = use_session();
    let days = days_left(&scholarship.deadline);
    let rmb = convert_with(&scholarship.amount, &use_config().currency);
    let heart_class = if saved { "text-red-500" } else { "text-neutral-400" };
    let save_target = scholarship.clone();
    let details_target = scholarship.clone();

    rsx! {
        div {
            class: "featured-card",
            div {
                class: "flex justify-between items-start mb-3",
                Badge { class: "bg-blue-100 text-blue-800", "{scholarship.match_rate}% 匹配" }
                button {
                    class: "save-toggle-inline",
                    onclick: move |_| session.dispatch(Action::ToggleSave(save_target.clone())),
                    Icon { icon: FaHeart, width: 16, height: 16, class: "{heart_class}" }
                }
            }
            h3 { class: "text-lg font-semibold mb-1", "{scholarship.name}" }
            p { class: "text-sm text-neutral-600 mb-3", "{scholarship.university} • {scholarship.country}" }
            div { class: "text-xl font-bold text-green-600", "{scholarship.amount}" }
            div { class: "text-xs text-green-500 mb-3", "{rmb}" }
            p { class: "text-sm text-neutral-700 mb-4", "{scholarship.description}" }
            if days <= 30 {
                div { class: "deadline-warning", "还剩{days}天就截止，建议尽快准备！" }
            }
            Button {
                class: "w-full",
                onclick: move |_| session.dispatch(Action::ViewDetails(details_target.clone())),
                "一键申请"
            }
        }
    }
}
