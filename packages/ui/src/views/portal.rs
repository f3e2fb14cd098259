use api::{ApiError, Backend};
use dioxus::prelude::*;
use store::derived::{days_left, profile_completion, simple_profile_completion};
use store::models::{
    is_supported_resume, AwardRecord, EducationRecord, PortalTemplate, ResumeRef,
};
use store::{
    catalog, Action, ApplicationRecord, Notice, PendingKey, ProfileDraft, Scholarship,
    ValidationError,
};

use crate::components::{Badge, Button, ButtonVariant, Card, Label, ProgressBar, FIELD_CLASS};
use crate::icons::{
    FaArrowLeft, FaAward, FaBell, FaCircleCheck, FaCrown, FaDownload, FaFileLines, FaHeart,
    FaPlus, FaTrash, FaUpload, FaUser,
};
use crate::session::{use_backend, use_session};
use crate::views::{ApplicationProgressCard, EmptyState, NotificationCenter, PricingModal};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PortalTab {
    Saved,
    Applied,
    Profile,
}

/// User center: overview, saved and applied lists, profile editing, notifications.
#[component]
pub fn PortalView() -> Element {
    let session = use_session();
    let mut tab = use_signal(|| PortalTab::Saved);

    let state = session.state.read();
    let completion = profile_completion(&state.profile());
    let saved_count = state.saved_count();
    let applied_count = state.applied_count();
    let approved = state.approved_count();
    drop(state);

    let tab_class = move |t: PortalTab| {
        if tab() == t {
            "portal-tab active"
        } else {
            "portal-tab"
        }
    };

    rsx! {
        div {
            class: "page-bg",
            div {
                class: "container mx-auto px-4 max-w-6xl py-8",
                div {
                    class: "flex items-center mb-8",
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "mr-4",
                        onclick: move |_| session.dispatch(Action::BackFromPortal),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        "返回"
                    }
                    div {
                        h1 { class: "text-3xl font-bold", "用户中心" }
                        p { class: "text-neutral-600 mt-1", "管理您的奖学金收藏、申请和个人资料" }
                    }
                }

                Card {
                    class: "mb-8 p-6 bg-gradient-to-r from-blue-50 to-indigo-50",
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        div {
                            class: "flex items-center gap-3",
                            Icon { icon: FaUser, width: 32, height: 32, class: "text-blue-600" }
                            div {
                                class: "flex-1",
                                div {
                                    class: "flex justify-between items-center mb-1",
                                    span { class: "text-sm font-medium text-neutral-700", "个人资料完善" }
                                    span { class: "text-sm font-bold text-blue-600", "{completion}%" }
                                }
                                ProgressBar { value: completion }
                            }
                        }
                        div {
                            class: "flex items-center gap-3",
                            Icon { icon: FaFileLines, width: 32, height: 32, class: "text-green-600" }
                            div {
                                div { class: "text-lg font-bold", "{applied_count}/∞" }
                                div { class: "text-sm text-neutral-600", "已提交申请" }
                            }
                        }
                        div {
                            class: "flex items-center gap-3",
                            Icon { icon: FaAward, width: 32, height: 32, class: "text-yellow-600" }
                            div {
                                div { class: "text-lg font-bold", "{approved}" }
                                div { class: "text-sm text-neutral-600", "获得奖学金" }
                            }
                        }
                    }
                }

                div {
                    class: "portal-tabs",
                    button {
                        class: tab_class(PortalTab::Saved),
                        onclick: move |_| tab.set(PortalTab::Saved),
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        "我的收藏 ({saved_count})"
                    }
                    button {
                        class: tab_class(PortalTab::Applied),
                        onclick: move |_| tab.set(PortalTab::Applied),
                        Icon { icon: FaFileLines, width: 14, height: 14 }
                        "我的申请 ({applied_count})"
                    }
                    button {
                        class: tab_class(PortalTab::Profile),
                        onclick: move |_| tab.set(PortalTab::Profile),
                        Icon { icon: FaUser, width: 14, height: 14 }
                        "我的资料"
                    }
                }

                {match tab() {
                    PortalTab::Saved => rsx! { SavedTab {} },
                    PortalTab::Applied => rsx! { AppliedTab {} },
                    PortalTab::Profile => rsx! { ProfileTab {} },
                }}
            }
        }
    }
}

#[component]
fn SavedTab() -> Element {
    let session = use_session();
    let saved = session.state.read().saved().to_vec();

    if saved.is_empty() {
        return rsx! {
            EmptyState {
                title: "暂无收藏的奖学金",
                hint: "浏览奖学金时点击收藏按钮，即可在这里查看",
            }
        };
    }

    rsx! {
        div {
            class: "grid gap-6",
            for s in saved {
                SavedCard { key: "{s.id}", scholarship: s.clone() }
            }
        }
    }
}

#[component]
fn SavedCard(scholarship: Scholarship) -> Element {
    let session = use_session();
    let applied = session.state.read().is_applied(scholarship.id);
    let days = days_left(&scholarship.deadline);
    let view_target = scholarship.clone();
    let apply_target = scholarship.clone();
    let remove_target = scholarship.clone();

    rsx! {
        Card {
            class: "p-6",
            div {
                class: "flex justify-between items-start mb-4",
                div {
                    h3 { class: "text-xl font-semibold", "{scholarship.name}" }
                    p { class: "text-neutral-600", "{scholarship.university} • {scholarship.country}" }
                }
                div {
                    class: "text-right",
                    div { class: "text-2xl font-bold text-green-600", "{scholarship.amount}" }
                    div { class: "text-sm text-red-600", "剩余 {days} 天" }
                }
            }
            p { class: "text-neutral-700 mb-4", "{scholarship.description}" }
            div {
                class: "flex gap-3",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| session.dispatch(Action::ViewDetails(view_target.clone())),
                    "查看详情"
                }
                Button {
                    disabled: applied,
                    onclick: move |_| session.dispatch(Action::ApplyOneClick(apply_target.clone())),
                    if applied { "已申请" } else { "⚡ 一键申请" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| session.dispatch(Action::ToggleSave(remove_target.clone())),
                    Icon { icon: FaHeart, width: 14, height: 14, class: "text-red-500" }
                    "取消收藏"
                }
            }
        }
    }
}

#[component]
fn AppliedTab() -> Element {
    let session = use_session();
    let applied = session.state.read().applied().to_vec();

    if applied.is_empty() {
        return rsx! {
            EmptyState {
                title: "暂无申请记录",
                hint: "提交奖学金申请后，可以在这里追踪进度",
            }
        };
    }

    rsx! {
        div {
            class: "grid gap-6",
            for record in applied {
                AppliedRow { key: "{record.application_id}", record: record.clone() }
            }
        }
    }
}

#[component]
fn AppliedRow(record: ApplicationRecord) -> Element {
    let session = use_session();
    let name = record.scholarship.name.clone();

    rsx! {
        div {
            ApplicationProgressCard { record }
            div {
                class: "flex justify-end mt-2",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| session.notify(Notice::success("下载成功", format!("{name}申请材料已下载"))),
                    Icon { icon: FaDownload, width: 14, height: 14 }
                    "下载申请材料"
                }
            }
        }
    }
}

#[component]
fn ProfileTab() -> Element {
    rsx! {
        div {
            class: "grid lg:grid-cols-2 gap-8 mb-8",
            ProfileEditor {}
            div {
                class: "space-y-8",
                TemplateLibrary {}
                NotificationCenter {}
            }
        }
        NotificationSettings {}
    }
}

/// Edits a local copy of the profile; "保存个人信息" commits it to the session.
#[component]
fn ProfileEditor() -> Element {
    let session = use_session();
    let mut draft = use_signal(|| session.state.peek().profile());
    let completion = profile_completion(&draft.read());
    let filled = simple_profile_completion(&draft.read());

    let on_resume = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        if !is_supported_resume(&file_name) {
            let err = ValidationError::UnsupportedResumeFormat(file_name);
            session.notify(Notice::error("文件格式不支持", err.to_string()));
            return;
        }
        session.notify(Notice::success("文件上传成功", format!("{file_name}已上传")));
        draft.write().resume = Some(ResumeRef { file_name });
    };

    rsx! {
        Card {
            class: "p-6 space-y-4",
            h3 {
                class: "text-lg font-semibold flex items-center gap-2",
                Icon { icon: FaUser, width: 18, height: 18, class: "text-blue-600" }
                "个人信息"
            }
            div {
                class: "flex justify-between text-sm text-neutral-600",
                span { "资料完善度" }
                span { class: "font-bold text-blue-600", "{completion}%" }
            }
            ProgressBar { value: completion }
            p { class: "text-xs text-neutral-500", "已填写字段 {filled}%" }

            div {
                class: "grid grid-cols-2 gap-4",
                TextField {
                    id: "name",
                    label: "姓名",
                    value: draft.read().contact.name.clone(),
                    oninput: move |v| draft.write().contact.name = v,
                }
                TextField {
                    id: "email",
                    label: "邮箱",
                    value: draft.read().contact.email.clone(),
                    oninput: move |v| draft.write().contact.email = v,
                }
            }
            TextField {
                id: "phone",
                label: "手机号",
                value: draft.read().contact.phone.clone(),
                oninput: move |v| draft.write().contact.phone = v,
            }
            div {
                class: "grid grid-cols-2 gap-4",
                TextField {
                    id: "university",
                    label: "学校",
                    value: draft.read().university.clone(),
                    oninput: move |v| draft.write().university = v,
                }
                TextField {
                    id: "major",
                    label: "专业",
                    value: draft.read().major.clone(),
                    oninput: move |v| draft.write().major = v,
                }
            }
            TextField {
                id: "gpa",
                label: "GPA",
                value: draft.read().gpa.clone(),
                oninput: move |v| draft.write().gpa = v,
            }

            EducationList { draft }
            AwardList { draft }

            div {
                class: "space-y-1.5",
                Label { html_for: "statement", "个人陈述" }
                textarea {
                    id: "statement",
                    class: FIELD_CLASS,
                    rows: 4,
                    placeholder: "请简述您的学术背景和申请动机...",
                    value: draft.read().personal_statement.clone(),
                    oninput: move |evt: FormEvent| draft.write().personal_statement = evt.value(),
                }
            }

            div {
                class: "space-y-1.5",
                Label { html_for: "resume", "简历上传" }
                label {
                    class: "upload-drop",
                    input {
                        id: "resume",
                        class: "hidden",
                        r#type: "file",
                        accept: ".pdf,.doc,.docx",
                        onchange: on_resume,
                    }
                    Icon { icon: FaUpload, width: 28, height: 28, class: "text-neutral-400" }
                    span { class: "text-sm text-neutral-600", "点击上传简历" }
                    span { class: "text-xs text-neutral-400", "支持 PDF, DOC, DOCX 格式" }
                }
                if let Some(resume) = draft.read().resume.clone() {
                    div {
                        class: "text-sm text-green-600 flex items-center gap-1",
                        Icon { icon: FaCircleCheck, width: 14, height: 14 }
                        "简历已上传：{resume.file_name}"
                    }
                }
            }

            Button {
                class: "w-full",
                onclick: move |_| session.dispatch(Action::UpdateProfile(draft())),
                "保存个人信息"
            }
        }
    }
}

#[component]
fn TextField(id: String, label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "space-y-1.5",
            Label { html_for: "{id}", "{label}" }
            input {
                id,
                class: FIELD_CLASS,
                r#type: "text",
                value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
fn EducationList(draft: Signal<ProfileDraft>) -> Element {
    let count = draft.read().education.len();
    rsx! {
        div {
            class: "space-y-2",
            div {
                class: "flex items-center justify-between",
                span { class: "text-sm font-medium text-neutral-700", "教育经历" }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "text-xs",
                    onclick: move |_| draft.write().education.push(EducationRecord::default()),
                    Icon { icon: FaPlus, width: 10, height: 10 }
                    "添加"
                }
            }
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "record-row",
                    input {
                        class: FIELD_CLASS,
                        placeholder: "学校",
                        value: draft.read().education[i].school.clone(),
                        oninput: move |evt: FormEvent| draft.write().education[i].school = evt.value(),
                    }
                    input {
                        class: FIELD_CLASS,
                        placeholder: "学位",
                        value: draft.read().education[i].degree.clone(),
                        oninput: move |evt: FormEvent| draft.write().education[i].degree = evt.value(),
                    }
                    input {
                        class: FIELD_CLASS,
                        placeholder: "专业",
                        value: draft.read().education[i].major.clone(),
                        oninput: move |evt: FormEvent| draft.write().education[i].major = evt.value(),
                    }
                    input {
                        class: FIELD_CLASS,
                        placeholder: "GPA",
                        value: draft.read().education[i].gpa.clone(),
                        oninput: move |evt: FormEvent| draft.write().education[i].gpa = evt.value(),
                    }
                    button {
                        class: "text-neutral-400 hover:text-red-600",
                        title: "删除",
                        onclick: move |_| {
                            draft.write().remove_education(i);
                        },
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[component]
fn AwardList(draft: Signal<ProfileDraft>) -> Element {
    let count = draft.read().awards.len();
    rsx! {
        div {
            class: "space-y-2",
            div {
                class: "flex items-center justify-between",
                span { class: "text-sm font-medium text-neutral-700", "获奖经历" }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "text-xs",
                    onclick: move |_| draft.write().awards.push(AwardRecord::default()),
                    Icon { icon: FaPlus, width: 10, height: 10 }
                    "添加"
                }
            }
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "record-row",
                    input {
                        class: FIELD_CLASS,
                        placeholder: "奖项名称",
                        value: draft.read().awards[i].title.clone(),
                        oninput: move |evt: FormEvent| draft.write().awards[i].title = evt.value(),
                    }
                    input {
                        class: FIELD_CLASS,
                        placeholder: "颁发机构",
                        value: draft.read().awards[i].issuer.clone(),
                        oninput: move |evt: FormEvent| draft.write().awards[i].issuer = evt.value(),
                    }
                    input {
                        class: FIELD_CLASS,
                        placeholder: "年份",
                        value: draft.read().awards[i].year.clone(),
                        oninput: move |evt: FormEvent| draft.write().awards[i].year = evt.value(),
                    }
                    button {
                        class: "text-neutral-400 hover:text-red-600",
                        title: "删除",
                        onclick: move |_| {
                            draft.write().remove_award(i);
                        },
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[component]
fn TemplateLibrary() -> Element {
    let session = use_session();
    let has_premium = session.state.read().has_premium();
    let mut show_pricing = use_signal(|| false);

    rsx! {
        Card {
            class: "p-6 space-y-4",
            h3 {
                class: "text-lg font-semibold flex items-center gap-2",
                Icon { icon: FaDownload, width: 18, height: 18, class: "text-blue-600" }
                "文档模版库"
            }
            for template in catalog::portal_templates() {
                PortalTemplateRow {
                    key: "{template.name}",
                    unlocked: template.free || has_premium,
                    template: template.clone(),
                    on_locked: move |_| show_pricing.set(true),
                }
            }
        }
        if show_pricing() {
            PricingModal { on_close: move |_| show_pricing.set(false) }
        }
    }
}

#[component]
fn PortalTemplateRow(template: PortalTemplate, unlocked: bool, on_locked: EventHandler<()>) -> Element {
    let session = use_session();
    let backend = use_backend();
    let name = template.name.clone();
    let template_id = template.template_id;
    let downloading = template_id
        .is_some_and(|id| session.is_pending(&PendingKey::DownloadTemplate(id)));

    let download = move |_: MouseEvent| {
        if !unlocked {
            on_locked.call(());
            return;
        }
        let Some(id) = template_id else {
            session.notify(Notice::success("定制服务已启动", "我们的专业团队将在24小时内联系您"));
            return;
        };
        let key = PendingKey::DownloadTemplate(id);
        if !session.begin(key.clone()) {
            return;
        }
        let backend = backend.clone();
        let name = name.clone();
        let has_premium = session.state.peek().has_premium();
        spawn(async move {
            let result = backend.download_template(id, has_premium).await;
            session.finish(&key);
            match result {
                Ok(file) => {
                    tracing::debug!(file = %file.file_name, "portal template ready");
                    session.notify(Notice::success("模版下载成功", format!("{name}已下载到本地")));
                }
                Err(ApiError::PremiumRequired) => on_locked.call(()),
                Err(e) => session.fail(&e),
            }
        });
    };

    rsx! {
        div {
            class: "border rounded-lg p-4 hover:bg-neutral-50 transition-colors",
            div {
                class: "flex justify-between items-start mb-2",
                div {
                    h4 {
                        class: "font-medium flex items-center gap-2",
                        "{template.name}"
                        if !template.free {
                            Icon { icon: FaCrown, width: 14, height: 14, class: "text-yellow-500" }
                        }
                    }
                    p { class: "text-sm text-neutral-600", "{template.description}" }
                }
                if template.free {
                    Badge { class: "bg-neutral-100 text-neutral-700", "免费" }
                } else {
                    Badge { class: "border border-neutral-300", "付费" }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                class: "w-full mt-2",
                disabled: downloading,
                onclick: download,
                Icon { icon: FaDownload, width: 14, height: 14 }
                if unlocked { "下载模版" } else { "升级解锁" }
            }
        }
    }
}

/// Local-only preference toggles.
#[component]
fn NotificationSettings() -> Element {
    let mut settings = use_signal(|| [true; 3]);
    let rows = [
        ("申请状态更新", "当申请状态发生变化时通知我"),
        ("截止日期提醒", "重要截止日期前7天提醒"),
        ("新奖学金推荐", "根据您的资料推荐合适的奖学金"),
    ];

    rsx! {
        Card {
            class: "p-6",
            h3 {
                class: "text-lg font-semibold flex items-center gap-2 mb-4",
                Icon { icon: FaBell, width: 18, height: 18, class: "text-blue-600" }
                "通知设置"
            }
            div {
                class: "space-y-4",
                for (i, (title, hint)) in rows.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "flex items-center justify-between",
                        div {
                            h4 { class: "font-medium", "{title}" }
                            p { class: "text-sm text-neutral-600", "{hint}" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| settings.with_mut(|s| s[i] = !s[i]),
                            if settings()[i] { "已开启" } else { "已关闭" }
                        }
                    }
                }
            }
        }
    }
}
