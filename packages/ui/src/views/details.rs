use api::{ApiError, ApplicationSubmission, Backend};
use dioxus::prelude::*;
use store::{Action, PendingKey, Scholarship};

use crate::components::{Badge, Button, ButtonVariant, Card, Label, FIELD_CLASS};
use crate::icons::{
    FaArrowLeft, FaAward, FaCalendarDays, FaCircleCheck, FaCrown, FaFileLines, FaHeart,
    FaLocationDot, FaSpinner, FaUpload, FaWandMagicSparkles,
};
use crate::session::{use_backend, use_session};
use crate::views::PricingModal;
use crate::Icon;

const AI_DRAFT: &str = "基于您的背景和经历，我建议您这样回答：这是一个由AI生成的示例回答，展示了如何更好地展示您的能力和经验...";

/// Application form for the selected scholarship.
#[component]
pub fn DetailsView() -> Element {
    let session = use_session();
    let selected = session.state.read().selected_scholarship().cloned();

    match selected {
        Some(scholarship) => rsx! {
            ApplicationForm { key: "{scholarship.id}", scholarship: scholarship.clone() }
        },
        None => rsx! {
            div {
                class: "page-bg flex items-center justify-center",
                Button {
                    onclick: move |_| session.dispatch(Action::BackToResults),
                    "返回奖学金列表"
                }
            }
        },
    }
}

#[component]
fn ApplicationForm(scholarship: Scholarship) -> Element {
    let session = use_session();
    let backend = use_backend();
    let mut submission = use_signal(|| ApplicationSubmission::new(&scholarship));
    let mut submitted = use_signal(|| false);
    let mut show_pricing = use_signal(|| false);

    let id = scholarship.id;
    let key = PendingKey::SubmitApplication(id);
    let submitting = session.is_pending(&key);

    let state = session.state.read();
    let is_saved = state.is_saved(id);
    let has_premium = state.has_premium();
    drop(state);

    let complete = submission.read().is_complete(&scholarship);

    let target = scholarship.clone();
    let submit = use_callback(move |_: ()| {
        let draft = submission();
        if let Err(e) = draft.validate(&target) {
            session.fail(&ApiError::from(e));
            return;
        }
        let key = PendingKey::SubmitApplication(target.id);
        if !session.begin(key.clone()) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.submit_application(&draft).await;
            session.finish(&key);
            match result {
                Ok(record) => {
                    session.dispatch(Action::RecordApplication(record));
                    submitted.set(true);
                }
                Err(e) => session.fail(&e),
            }
        });
    });

    if submitted() {
        return rsx! {
            SubmittedScreen { name: scholarship.name.clone() }
        };
    }

    let save_target = scholarship.clone();
    let apply_target = scholarship.clone();
    let save_class = if is_saved {
        "bg-red-50 text-red-600 border-red-200"
    } else {
        ""
    };

    rsx! {
        div {
            class: "page-bg py-8",
            div {
                class: "container mx-auto px-4 max-w-4xl",

                div {
                    class: "flex items-center justify-between mb-8",
                    div {
                        class: "flex items-center",
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "mr-4",
                            onclick: move |_| session.dispatch(Action::BackToResults),
                            Icon { icon: FaArrowLeft, width: 14, height: 14 }
                            "返回列表"
                        }
                        div {
                            h1 { class: "text-3xl font-bold", "奖学金申请" }
                            p { class: "text-neutral-600 mt-1", "请完成以下申请材料" }
                        }
                    }
                    div {
                        class: "flex gap-3",
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "{save_class}",
                            onclick: move |_| session.dispatch(Action::ToggleSave(save_target.clone())),
                            Icon { icon: FaHeart, width: 14, height: 14 }
                            if is_saved { "取消收藏" } else { "收藏" }
                        }
                        Button {
                            class: "bg-green-600 hover:bg-green-700",
                            onclick: move |_| session.dispatch(Action::ApplyOneClick(apply_target.clone())),
                            "⚡ 一键申请"
                        }
                    }
                }

                Card {
                    class: "mb-8 p-6",
                    div {
                        class: "flex justify-between items-start",
                        div {
                            class: "flex-1",
                            div {
                                class: "flex items-center gap-3 mb-2",
                                Icon { icon: FaAward, width: 24, height: 24, class: "text-yellow-500" }
                                h2 { class: "text-2xl font-semibold", "{scholarship.name}" }
                            }
                            div {
                                class: "flex items-center gap-4 text-neutral-600 mb-4",
                                span {
                                    class: "flex items-center gap-1",
                                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                                    "{scholarship.university} • {scholarship.country}"
                                }
                                Badge { class: "border border-neutral-300", "{scholarship.kind}" }
                            }
                            p { class: "text-neutral-700", "{scholarship.description}" }
                        }
                        div {
                            class: "text-right",
                            div { class: "text-3xl font-bold text-green-600", "{scholarship.amount}" }
                            div { class: "text-sm text-neutral-500", "每年" }
                            div {
                                class: "flex items-center gap-1 mt-2 text-red-600 text-sm font-medium",
                                Icon { icon: FaCalendarDays, width: 14, height: 14 }
                                "{scholarship.deadline}"
                            }
                        }
                    }
                }

                Card {
                    class: "mb-8 p-6 space-y-6",
                    h3 {
                        class: "text-lg font-semibold flex items-center gap-2",
                        Icon { icon: FaFileLines, width: 18, height: 18, class: "text-blue-600" }
                        "申请问题"
                    }
                    for (index, question) in scholarship.questions.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "space-y-2",
                            div {
                                class: "flex items-center justify-between",
                                Label { html_for: "question-{index}", "{index + 1}. {question}" }
                                button {
                                    class: "ai-assist",
                                    title: "AI助力，帮您更好展示自己",
                                    onclick: move |_| {
                                        if has_premium {
                                            submission.write().answers[index] = AI_DRAFT.to_string();
                                        } else {
                                            show_pricing.set(true);
                                        }
                                    },
                                    Icon { icon: FaWandMagicSparkles, width: 12, height: 12 }
                                    "AI助力"
                                    if !has_premium {
                                        Icon { icon: FaCrown, width: 12, height: 12 }
                                    }
                                }
                            }
                            textarea {
                                id: "question-{index}",
                                class: "{FIELD_CLASS} min-h-[120px] resize-none",
                                placeholder: "请在此输入您的回答...",
                                value: submission.read().answers[index].clone(),
                                oninput: move |evt: FormEvent| submission.write().answers[index] = evt.value(),
                            }
                            div {
                                class: "text-xs text-neutral-500",
                                "已输入 {submission.read().answers[index].chars().count()} 字符"
                            }
                        }
                    }
                }

                Card {
                    class: "mb-8 p-6 space-y-6",
                    h3 {
                        class: "text-lg font-semibold flex items-center gap-2",
                        Icon { icon: FaUpload, width: 18, height: 18, class: "text-blue-600" }
                        "申请材料上传"
                    }
                    for (index, document) in scholarship.required_documents.iter().enumerate() {
                        div {
                            key: "{document}",
                            class: "space-y-2",
                            Label { html_for: "file-{index}", "{document} *" }
                            label {
                                class: "upload-drop",
                                input {
                                    id: "file-{index}",
                                    class: "hidden",
                                    r#type: "file",
                                    accept: ".pdf,.doc,.docx,.jpg,.png",
                                    onchange: move |evt: FormEvent| {
                                        if let Some(file) = evt.files().into_iter().next() {
                                            submission.write().documents[index] = Some(file.name());
                                        }
                                    },
                                }
                                Icon { icon: FaUpload, width: 28, height: 28, class: "text-neutral-400" }
                                span { class: "text-sm text-neutral-600", "点击上传文件" }
                                span { class: "text-xs text-neutral-400", "支持 PDF, DOC, DOCX, JPG, PNG 格式" }
                            }
                            if let Some(name) = submission.read().documents[index].clone() {
                                div {
                                    class: "flex items-center gap-2 text-sm text-green-600",
                                    Icon { icon: FaFileLines, width: 14, height: 14 }
                                    "已上传文件：{name}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "flex justify-center",
                    Button {
                        class: "px-12 py-3 text-lg",
                        disabled: !complete || submitting,
                        onclick: move |_| submit.call(()),
                        if submitting {
                            Icon { icon: FaSpinner, width: 16, height: 16, class: "animate-spin" }
                            "提交中..."
                        } else {
                            "提交申请"
                        }
                    }
                }
                if !complete {
                    p { class: "text-center text-sm text-neutral-500 mt-4", "请完成所有问题回答并上传必需文件后提交申请" }
                }
            }

            if show_pricing() {
                PricingModal { on_close: move |_| show_pricing.set(false) }
            }
        }
    }
}

#[component]
fn SubmittedScreen(name: String) -> Element {
    let session = use_session();
    rsx! {
        div {
            class: "page-bg py-8",
            div {
                class: "container mx-auto px-4 max-w-4xl",
                Card {
                    class: "p-12 text-center bg-gradient-to-r from-green-50 to-blue-50",
                    div {
                        class: "flex justify-center mb-6",
                        Icon { icon: FaCircleCheck, width: 64, height: 64, class: "text-green-600" }
                    }
                    h2 { class: "text-3xl font-bold mb-4", "申请已提交" }
                    p {
                        class: "text-lg text-neutral-600 mb-8",
                        "太棒了！您的 {name} 申请已成功提交。申请已提交，预计7天内反馈。我们会第一时间通知你结果！"
                    }
                    Button {
                        onclick: move |_| session.dispatch(Action::BackToResults),
                        "返回奖学金列表"
                    }
                }
            }
        }
    }
}
