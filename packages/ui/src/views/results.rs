use api::Backend;
use dioxus::prelude::*;
use store::derived::{
    average_match_rate, filter_scholarships, group_thousands, split_recommended, total_amount,
    ScholarshipFilter,
};
use store::{Action, ApplicationRecord, IntakeForm, Scholarship};

use crate::components::{Badge, Button, ButtonVariant, Card, ProgressBar, FIELD_CLASS};
use crate::icons::{FaArrowLeft, FaAward, FaChartLine, FaHeart, FaListCheck, FaTrophy};
use crate::session::{use_backend, use_session};
use crate::views::{MatchingLoader, ScholarshipCard};
use crate::Icon;

const SLOGANS: [&str; 2] = ["一份申请，成就无限可能", "轻松申请，收获非凡"];

/// Minimum-match choices offered above the list.
const MIN_MATCH_OPTIONS: [u8; 4] = [0, 70, 80, 90];

#[derive(Clone, Copy, Debug, PartialEq)]
enum Tab {
    Matches,
    Saved,
    Progress,
}

/// Match results with saved and progress tabs. Shows the loader on first entry.
#[component]
pub fn ResultsView() -> Element {
    let session = use_session();
    let backend = use_backend();
    let mut tab = use_signal(|| Tab::Matches);

    let state = session.state.read();
    let form = state.form_data().cloned().unwrap_or_default();
    let name = state
        .user()
        .map(|u| u.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| form.name.clone());
    let show_loader = state.show_initial_loader();
    let saved_count = state.saved_count();
    let applied_count = state.applied_count();
    drop(state);

    let lookup_form = form.clone();
    let results = use_resource(move || {
        let backend = backend.clone();
        let form = lookup_form.clone();
        async move { backend.fetch_results(&form).await }
    });

    if show_loader {
        return rsx! {
            MatchingLoader { name }
        };
    }

    let tab_class = move |t: Tab| {
        if tab() == t {
            "results-tab active"
        } else {
            "results-tab"
        }
    };

    rsx! {
        div {
            class: "page-bg",
            div {
                class: "container mx-auto px-4 py-8",
                div {
                    class: "flex items-center justify-between mb-6",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| session.dispatch(Action::ReturnHome),
                        Icon { icon: FaArrowLeft, width: 12, height: 12 }
                        "返回首页"
                    }
                }

                div {
                    class: "results-tabs",
                    button {
                        class: tab_class(Tab::Matches),
                        onclick: move |_| tab.set(Tab::Matches),
                        "匹配结果"
                    }
                    button {
                        class: tab_class(Tab::Saved),
                        onclick: move |_| tab.set(Tab::Saved),
                        Icon { icon: FaHeart, width: 12, height: 12 }
                        "收藏夹 ({saved_count})"
                    }
                    button {
                        class: tab_class(Tab::Progress),
                        onclick: move |_| tab.set(Tab::Progress),
                        Icon { icon: FaListCheck, width: 12, height: 12 }
                        "申请进度 ({applied_count})"
                    }
                }

                {match tab() {
                    Tab::Matches => match &*results.read() {
                        Some(Ok(list)) => rsx! {
                            MatchList { name: name.clone(), form: form.clone(), scholarships: list.clone() }
                        },
                        Some(Err(e)) => rsx! {
                            p { class: "text-red-600", "{e}" }
                        },
                        None => rsx! {
                            p { class: "text-neutral-500", "加载中..." }
                        },
                    },
                    Tab::Saved => rsx! { SavedList {} },
                    Tab::Progress => rsx! { ProgressList {} },
                }}
            }
        }
    }
}

#[component]
fn MatchList(name: String, form: IntakeForm, scholarships: Vec<Scholarship>) -> Element {
    let session = use_session();
    let mut country_pick = use_signal(|| None::<String>);
    let mut min_match = use_signal(|| 0u8);
    let mut saved_only = use_signal(|| false);

    let state = session.state.read();
    let filter = ScholarshipFilter {
        country: country_pick(),
        min_match_rate: min_match(),
        only_ids: saved_only().then(|| state.saved().iter().map(|s| s.id).collect()),
    };
    let shown = filter_scholarships(&scholarships, &filter);
    let (recommended, others) = split_recommended(&shown);
    let average = average_match_rate(&scholarships);
    let total = group_thousands(total_amount(&scholarships));
    let count = scholarships.len();
    let recommended_count = scholarships.iter().filter(|s| s.is_recommended).count();

    let mut countries: Vec<String> = Vec::new();
    for s in &scholarships {
        if !countries.contains(&s.country) {
            countries.push(s.country.clone());
        }
    }
    let selected_country = country_pick().unwrap_or_default();

    rsx! {
        div {
            class: "mb-8",
            h1 { class: "text-3xl font-bold mb-2", "为 {name} 找到 {count} 个匹配的奖学金项目" }
            if let Some(country) = form.target_country {
                p { class: "text-neutral-600", "目标国家：{country.label()}" }
            }
        }

        div {
            class: "grid md:grid-cols-4 gap-4 mb-10",
            SummaryCard { label: "匹配项目", value: "{count}", color: "text-blue-600" }
            SummaryCard { label: "平均匹配度", value: "{average}%", color: "text-green-600" }
            SummaryCard { label: "总奖学金金额", value: "{total}", color: "text-purple-600" }
            SummaryCard { label: "重点推荐", value: "{recommended_count}", color: "text-orange-600" }
        }

        div {
            class: "flex flex-wrap items-center gap-3 mb-8",
            select {
                class: "{FIELD_CLASS} w-auto",
                value: "{selected_country}",
                onchange: move |evt: FormEvent| {
                    let value = evt.value();
                    country_pick.set((!value.is_empty()).then_some(value));
                },
                option { value: "", "全部国家" }
                for c in countries {
                    option { key: "{c}", value: "{c}", "{c}" }
                }
            }
            select {
                class: "{FIELD_CLASS} w-auto",
                value: "{min_match}",
                onchange: move |evt: FormEvent| min_match.set(evt.value().parse().unwrap_or(0)),
                for rate in MIN_MATCH_OPTIONS {
                    option {
                        key: "{rate}",
                        value: "{rate}",
                        if rate == 0 { "不限匹配度" } else { "匹配度 ≥ {rate}%" }
                    }
                }
            }
            label {
                class: "flex items-center gap-2 text-sm text-neutral-700",
                input {
                    r#type: "checkbox",
                    checked: saved_only(),
                    onchange: move |evt: FormEvent| saved_only.set(evt.checked()),
                }
                "只看收藏"
            }
            span { class: "text-sm text-neutral-500", "显示 {shown.len()} / {count}" }
        }

        if shown.is_empty() {
            EmptyState {
                title: "没有符合筛选条件的奖学金",
                hint: "试试放宽国家或匹配度条件",
            }
        }

        if !recommended.is_empty() {
            div {
                class: "mb-10",
                div {
                    class: "flex items-center gap-2 mb-4",
                    Icon { icon: FaTrophy, width: 22, height: 22, class: "text-yellow-500" }
                    h2 { class: "text-2xl font-bold", "重点推荐奖学金" }
                    Badge { class: "bg-gradient-to-r from-yellow-400 to-orange-500 text-white", "TOP推荐" }
                }
                div {
                    class: "space-y-6",
                    for (i, s) in recommended.into_iter().enumerate() {
                        ScholarshipCard {
                            key: "{s.id}",
                            saved: state.is_saved(s.id),
                            slogan: SLOGANS[i % SLOGANS.len()].to_string(),
                            scholarship: s.clone(),
                            on_toggle_save: move |s| session.dispatch(Action::ToggleSave(s)),
                            on_view_details: move |s| session.dispatch(Action::ViewDetails(s)),
                        }
                    }
                }
            }
        }

        if !others.is_empty() {
            div {
                h2 { class: "text-2xl font-bold mb-4", "其他匹配奖学金" }
                div {
                    class: "space-y-6",
                    for s in others {
                        ScholarshipCard {
                            key: "{s.id}",
                            saved: state.is_saved(s.id),
                            scholarship: s.clone(),
                            on_toggle_save: move |s| session.dispatch(Action::ToggleSave(s)),
                            on_view_details: move |s| session.dispatch(Action::ViewDetails(s)),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String, color: String) -> Element {
    rsx! {
        Card {
            class: "p-6 text-center",
            div { class: "text-3xl font-bold mb-1 {color}", "{value}" }
            div { class: "text-sm text-neutral-600", "{label}" }
        }
    }
}

#[component]
fn SavedList() -> Element {
    let session = use_session();
    let saved = filter_scholarships(session.state.read().saved(), &ScholarshipFilter::default());

    if saved.is_empty() {
        return rsx! {
            EmptyState {
                title: "还没有收藏的奖学金",
                hint: "在匹配结果中点击爱心即可收藏感兴趣的项目",
            }
        };
    }

    rsx! {
        div {
            class: "space-y-6",
            for s in saved {
                ScholarshipCard {
                    key: "{s.id}",
                    saved: true,
                    scholarship: s.clone(),
                    on_toggle_save: move |s| session.dispatch(Action::ToggleSave(s)),
                    on_view_details: move |s| session.dispatch(Action::ViewDetails(s)),
                }
            }
        }
    }
}

#[component]
fn ProgressList() -> Element {
    let session = use_session();
    let applied = session.state.read().applied().to_vec();

    if applied.is_empty() {
        return rsx! {
            EmptyState {
                title: "还没有提交任何申请",
                hint: "选择心仪的奖学金，一键即可完成申请",
            }
        };
    }

    rsx! {
        div {
            class: "space-y-4",
            for record in applied {
                ApplicationProgressCard { key: "{record.application_id}", record: record.clone() }
            }
        }
    }
}

/// One submitted application with its status and progress bar.
#[component]
pub fn ApplicationProgressCard(record: ApplicationRecord) -> Element {
    let status = record.status;
    rsx! {
        Card {
            class: "p-6",
            div {
                class: "flex justify-between items-start mb-4",
                div {
                    h3 { class: "text-lg font-semibold", "{record.scholarship.name}" }
                    p { class: "text-sm text-neutral-500", "{record.scholarship.university}" }
                }
                Badge { class: "bg-blue-100 text-blue-800", "{status.label()}" }
            }
            ProgressBar { value: status.progress(), class: "mb-3" }
            div {
                class: "flex justify-between text-xs text-neutral-500",
                span {
                    class: "flex items-center gap-1",
                    Icon { icon: FaChartLine, width: 10, height: 10 }
                    "申请编号：{record.application_id}"
                }
                span { "提交日期：{record.submitted_date}" }
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            Icon { icon: FaAward, width: 48, height: 48, class: "text-neutral-300 mx-auto mb-4" }
            h3 { class: "text-lg font-medium text-neutral-700 mb-1", "{title}" }
            p { class: "text-neutral-500", "{hint}" }
        }
    }
}
