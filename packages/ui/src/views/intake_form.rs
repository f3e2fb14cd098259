use api::{ApiError, Backend};
use dioxus::prelude::*;
use store::models::{is_supported_resume, Education, Major, TargetCountry};
use store::{Action, IntakeForm, IntakeQuestion, Notice, PendingKey, ValidationError};

use crate::components::{Button, ButtonVariant, Card, ProgressBar, FIELD_CLASS};
use crate::icons::{FaArrowLeft, FaArrowRight, FaCircleCheck, FaFileArrowUp, FaSpinner};
use crate::session::{use_backend, use_session};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Stage {
    /// Optional résumé upload before the questions.
    Resume,
    /// Extracted answers shown for confirmation.
    Review,
    Question(usize),
}

/// The guided intake: optional résumé, then one question at a time.
#[component]
pub fn IntakeFormView() -> Element {
    let session = use_session();
    let backend = use_backend();
    let mut stage = use_signal(|| Stage::Resume);
    let mut form = use_signal(IntakeForm::default);
    let mut resume_name = use_signal(|| None::<String>);

    let extracting = session.is_pending(&PendingKey::ExtractResume);
    let submitting = session.is_pending(&PendingKey::SubmitForm);

    let extract_backend = backend.clone();
    let extract = use_callback(move |file_name: String| {
        if !is_supported_resume(&file_name) {
            session.fail(&ApiError::from(ValidationError::UnsupportedResumeFormat(
                file_name,
            )));
            return;
        }
        if !session.begin(PendingKey::ExtractResume) {
            return;
        }
        resume_name.set(Some(file_name.clone()));
        let backend = extract_backend.clone();
        spawn(async move {
            let result = backend.extract_resume(&file_name).await;
            session.finish(&PendingKey::ExtractResume);
            match result {
                Ok(extracted) => {
                    form.write().merge(&extracted);
                    stage.set(Stage::Review);
                    session.notify(Notice::success(
                        "简历上传成功",
                        "系统已自动提取您的信息，请核对并确认",
                    ));
                }
                Err(e) => {
                    resume_name.set(None);
                    session.fail(&e);
                }
            }
        });
    });

    let submit = use_callback(move |_: ()| {
        let answers = form();
        if let Err(e) = answers.validate() {
            session.fail(&ApiError::from(e));
            return;
        }
        if !session.begin(PendingKey::SubmitForm) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.submit_profile(&answers).await;
            session.finish(&PendingKey::SubmitForm);
            match result {
                Ok(()) => {
                    session.notify(Notice::success(
                        "信息提交成功",
                        "正在为您匹配最适合的奖学金项目...",
                    ));
                    session.dispatch(Action::SubmitForm(answers));
                }
                Err(e) => session.fail(&e),
            }
        });
    });

    rsx! {
        div {
            class: "page-bg flex items-center justify-center px-4 py-12",
            Card {
                class: "w-full max-w-2xl p-8",
                {match stage() {
                    Stage::Resume => rsx! {
                        h2 { class: "text-2xl font-bold mb-2", "上传简历 (可选)" }
                        p { class: "text-neutral-500 mb-6", "上传简历后，系统将自动提取您的基本信息，为您节省填写时间" }
                        label {
                            class: "resume-drop",
                            if extracting {
                                Icon { icon: FaSpinner, width: 40, height: 40, class: "animate-spin text-primary-600 mx-auto mb-3" }
                                p { "正在解析 {resume_name().unwrap_or_default()} ..." }
                            } else {
                                Icon { icon: FaFileArrowUp, width: 40, height: 40, class: "text-neutral-400 mx-auto mb-3" }
                                p { class: "font-medium", "点击上传简历" }
                                p { class: "text-xs text-neutral-500 mt-1", "支持 PDF、DOC、DOCX 格式" }
                            }
                            input {
                                class: "hidden",
                                r#type: "file",
                                accept: ".pdf,.doc,.docx",
                                disabled: extracting,
                                onchange: move |evt: FormEvent| {
                                    if let Some(file) = evt.files().into_iter().next() {
                                        extract.call(file.name());
                                    }
                                },
                            }
                        }
                        div {
                            class: "flex justify-between mt-6",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| session.dispatch(Action::ReturnHome),
                                "取消"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: extracting,
                                onclick: move |_| stage.set(Stage::Question(0)),
                                "跳过，手动填写信息"
                            }
                        }
                    },
                    Stage::Review => rsx! {
                        ReviewExtracted {
                            form: form(),
                            file_name: resume_name().unwrap_or_default(),
                            on_confirm: move |_| {
                                let next = IntakeQuestion::ALL
                                    .iter()
                                    .find(|q| !q.is_answered(&form.read()))
                                    .map(|q| q.index())
                                    .unwrap_or(IntakeQuestion::ALL.len() - 1);
                                stage.set(Stage::Question(next));
                            },
                            on_edit: move |_| stage.set(Stage::Question(0)),
                        }
                    },
                    Stage::Question(index) => rsx! {
                        QuestionStep {
                            index,
                            form,
                            submitting,
                            on_back: move |_| {
                                if index == 0 {
                                    stage.set(Stage::Resume);
                                } else {
                                    stage.set(Stage::Question(index - 1));
                                }
                            },
                            on_next: move |_| stage.set(Stage::Question(index + 1)),
                            on_finish: move |_| submit.call(()),
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn ReviewExtracted(
    form: IntakeForm,
    file_name: String,
    on_confirm: EventHandler<()>,
    on_edit: EventHandler<()>,
) -> Element {
    let education = form.education.map(Education::label).unwrap_or("未识别");
    let major = form.major.map(Major::label).unwrap_or("未识别");
    let country = form.target_country.map(TargetCountry::label).unwrap_or("待填写");

    rsx! {
        div {
            class: "flex items-center gap-2 text-green-600 mb-4",
            Icon { icon: FaCircleCheck, width: 20, height: 20 }
            span { class: "font-medium", "已从 {file_name} 中提取以下信息" }
        }
        dl {
            class: "extracted-summary",
            dt { "姓名" }
            dd { "{form.name}" }
            dt { "学历" }
            dd { "{education}" }
            dt { "GPA" }
            dd { "{form.gpa}" }
            dt { "专业" }
            dd { "{major}" }
            dt { "目标国家" }
            dd { "{country}" }
        }
        div {
            class: "flex justify-between mt-6",
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_edit.call(()),
                "逐项修改"
            }
            Button {
                onclick: move |_| on_confirm.call(()),
                "确认信息，继续"
                Icon { icon: FaArrowRight, width: 14, height: 14 }
            }
        }
    }
}

#[component]
fn QuestionStep(
    index: usize,
    form: Signal<IntakeForm>,
    submitting: bool,
    on_back: EventHandler<()>,
    on_next: EventHandler<()>,
    on_finish: EventHandler<()>,
) -> Element {
    let session = use_session();
    let Some(question) = IntakeQuestion::at(index) else {
        return rsx! {};
    };
    let total = IntakeQuestion::ALL.len();
    let is_last = index + 1 == total;
    let progress = (((index + 1) * 100) / total) as u8;
    let answered = question.is_answered(&form.read());
    let count = question.scholarship_count();

    let advance = move |_| {
        if !question.is_answered(&form.read()) {
            session.notify(Notice::warning(
                "请完成当前问题",
                ValidationError::UnansweredQuestion(question).to_string(),
            ));
            return;
        }
        if is_last {
            on_finish.call(());
        } else {
            on_next.call(());
        }
    };

    rsx! {
        div {
            class: "mb-8",
            div {
                class: "flex justify-between text-sm text-neutral-500 mb-2",
                span { "问题 {index + 1} / {total}" }
                span { "完成进度 {progress}%" }
            }
            ProgressBar { value: progress }
        }

        h2 { class: "text-2xl font-bold mb-2", "{question.title()}" }
        p { class: "text-neutral-500 mb-2", "{question.description()}" }
        p { class: "text-sm text-primary-600 mb-6", "📊 {count}+ 个奖学金项目需要此信息" }

        div {
            class: "mb-8",
            {match question {
                IntakeQuestion::Name => rsx! {
                    input {
                        class: FIELD_CLASS,
                        r#type: "text",
                        placeholder: "请输入您的姓名",
                        value: form.read().name.clone(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                },
                IntakeQuestion::Gpa => rsx! {
                    input {
                        class: FIELD_CLASS,
                        r#type: "text",
                        placeholder: "例如：3.8/4.0 或 85/100",
                        value: form.read().gpa.clone(),
                        oninput: move |evt: FormEvent| form.write().gpa = evt.value(),
                    }
                },
                IntakeQuestion::Education => rsx! {
                    div {
                        class: "option-grid",
                        for e in Education::ALL {
                            OptionButton {
                                key: "{e.code()}",
                                label: e.label().to_string(),
                                selected: form.read().education == Some(e),
                                onclick: move |_| form.write().education = Some(e),
                            }
                        }
                    }
                },
                IntakeQuestion::Major => rsx! {
                    div {
                        class: "option-grid",
                        for m in Major::ALL {
                            OptionButton {
                                key: "{m.code()}",
                                label: m.label().to_string(),
                                selected: form.read().major == Some(m),
                                onclick: move |_| form.write().major = Some(m),
                            }
                        }
                    }
                },
                IntakeQuestion::TargetCountry => rsx! {
                    div {
                        class: "option-grid",
                        for c in TargetCountry::ALL {
                            OptionButton {
                                key: "{c.code()}",
                                label: c.label().to_string(),
                                selected: form.read().target_country == Some(c),
                                onclick: move |_| form.write().target_country = Some(c),
                            }
                        }
                    }
                },
            }}
        }

        div {
            class: "flex justify-between",
            div {
                class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| session.dispatch(Action::ReturnHome),
                    "取消"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: submitting,
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    "上一题"
                }
            }
            Button {
                disabled: submitting || !answered,
                onclick: advance,
                if is_last {
                    if submitting {
                        Icon { icon: FaSpinner, width: 14, height: 14, class: "animate-spin" }
                        "提交中..."
                    } else {
                        "完成匹配"
                    }
                } else {
                    "下一题"
                    Icon { icon: FaArrowRight, width: 12, height: 12 }
                }
            }
        }
    }
}

#[component]
fn OptionButton(label: String, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if selected { "option selected" } else { "option" };
    rsx! {
        button {
            class,
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
