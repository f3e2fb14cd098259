use api::{ApiError, Backend};
use dioxus::prelude::*;
use store::models::TemplateRecord;
use store::{Action, Notice, PendingKey};

use crate::components::{Badge, Button, ButtonVariant, Card};
use crate::icons::{FaArrowLeft, FaCrown, FaDownload, FaEye, FaFileLines, FaStar};
use crate::session::{use_backend, use_session};
use crate::views::{ModalOverlay, PricingModal};
use crate::Icon;

/// Writing-template library with preview, download, and premium gating.
#[component]
pub fn TemplatesView() -> Element {
    let session = use_session();
    let backend = use_backend();
    let mut preview = use_signal(|| None::<TemplateRecord>);
    let mut show_pricing = use_signal(|| false);

    let list_backend = backend.clone();
    let templates = use_resource(move || {
        let backend = list_backend.clone();
        async move { backend.list_templates().await }
    });

    let has_premium = session.state.read().has_premium();

    let download = use_callback(move |template: TemplateRecord| {
        if template.is_premium && !has_premium {
            show_pricing.set(true);
            return;
        }
        let key = PendingKey::DownloadTemplate(template.id);
        if !session.begin(key.clone()) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.download_template(template.id, has_premium).await;
            session.finish(&key);
            match result {
                Ok(file) => {
                    tracing::debug!(file = %file.file_name, bytes = file.content.len(), "template ready");
                    session.notify(Notice::success(
                        "下载成功！",
                        format!("{} 已下载到您的设备", template.title),
                    ));
                }
                Err(ApiError::PremiumRequired) => show_pricing.set(true),
                Err(e) => session.fail(&e),
            }
        });
    });

    let customize = use_callback(move |_: TemplateRecord| {
        if !has_premium {
            show_pricing.set(true);
            return;
        }
        session.notify(Notice::success(
            "定制服务已启动",
            "我们的专业团队将在24小时内联系您",
        ));
    });

    rsx! {
        div {
            class: "page-bg py-8",
            div {
                class: "container mx-auto px-4 max-w-6xl",
                div {
                    class: "flex items-center mb-8",
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "mr-4",
                        onclick: move |_| session.dispatch(Action::ReturnHome),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        "返回"
                    }
                    div {
                        h1 { class: "text-3xl font-bold", "文书模板中心" }
                        p { class: "text-neutral-600 mt-1", "不知道怎么写文书？我们先帮你起个头" }
                    }
                }

                div {
                    class: "template-banner",
                    p { "精心设计的模板 + AI智能助手 = 完美的申请文书" }
                }

                {match &*templates.read() {
                    Some(Ok(list)) => rsx! {
                        div {
                            class: "grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-12",
                            for template in list.iter().cloned() {
                                TemplateCard {
                                    key: "{template.id}",
                                    template: template.clone(),
                                    downloading: session.is_pending(&PendingKey::DownloadTemplate(template.id)),
                                    on_preview: move |t| preview.set(Some(t)),
                                    on_download: move |t| download.call(t),
                                    on_customize: move |t| customize.call(t),
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "text-red-600", "{e}" }
                    },
                    None => rsx! {
                        p { class: "text-neutral-500", "加载中..." }
                    },
                }}

                if !has_premium {
                    Card {
                        class: "p-8 text-center bg-gradient-to-r from-purple-50 to-pink-50",
                        Icon { icon: FaCrown, width: 40, height: 40, class: "text-yellow-500 mx-auto mb-4" }
                        h3 { class: "text-2xl font-bold mb-4", "升级 Premium，解锁全部功能" }
                        p {
                            class: "text-neutral-600 mb-6",
                            "• 所有高级模板免费下载"
                            br {}
                            "• 一对一文书定制修改服务"
                            br {}
                            "• AI智能文书优化建议"
                            br {}
                            "• 24小时专家在线答疑"
                        }
                        Button {
                            onclick: move |_| show_pricing.set(true),
                            "立即升级 Premium"
                        }
                    }
                }
            }

            if let Some(template) = preview() {
                TemplatePreview {
                    template,
                    on_close: move |_| preview.set(None),
                    on_download: move |t| download.call(t),
                    on_customize: move |t| customize.call(t),
                }
            }

            if show_pricing() {
                PricingModal { on_close: move |_| show_pricing.set(false) }
            }
        }
    }
}

#[component]
fn TemplateCard(
    template: TemplateRecord,
    downloading: bool,
    on_preview: EventHandler<TemplateRecord>,
    on_download: EventHandler<TemplateRecord>,
    on_customize: EventHandler<TemplateRecord>,
) -> Element {
    let preview_target = template.clone();
    let download_target = template.clone();
    let customize_target = template.clone();

    rsx! {
        Card {
            class: "p-6 flex flex-col",
            div {
                class: "flex items-start gap-3 mb-3",
                Icon { icon: FaFileLines, width: 22, height: 22, class: "text-blue-600" }
                div {
                    class: "flex-1",
                    h3 { class: "font-semibold", "{template.title}" }
                    div {
                        class: "flex gap-2 mt-1",
                        Badge { class: "border border-neutral-300", "{template.kind}" }
                        Badge { class: "bg-neutral-100 text-neutral-700", "{template.category}" }
                    }
                }
            }
            p { class: "text-sm text-neutral-600 mb-4", "{template.description}" }
            div {
                class: "flex flex-wrap gap-1 mb-4",
                for tag in template.tags.iter() {
                    Badge { key: "{tag}", class: "bg-blue-50 text-blue-700", "{tag}" }
                }
            }
            div {
                class: "flex items-center justify-between text-sm text-neutral-500 mb-4",
                div {
                    class: "flex items-center gap-4",
                    span {
                        class: "flex items-center gap-1",
                        Icon { icon: FaDownload, width: 12, height: 12 }
                        "{template.downloads}"
                    }
                    span {
                        class: "flex items-center gap-1",
                        Icon { icon: FaStar, width: 12, height: 12, class: "text-yellow-400" }
                        "{template.rating}"
                    }
                }
                if template.is_premium {
                    Badge {
                        class: "bg-gradient-to-r from-yellow-400 to-orange-500 text-white",
                        Icon { icon: FaCrown, width: 10, height: 10 }
                        "Premium"
                    }
                }
            }
            div {
                class: "mt-auto space-y-2",
                div {
                    class: "grid grid-cols-2 gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_preview.call(preview_target.clone()),
                        Icon { icon: FaEye, width: 12, height: 12 }
                        "预览"
                    }
                    Button {
                        disabled: downloading,
                        onclick: move |_| on_download.call(download_target.clone()),
                        Icon { icon: FaDownload, width: 12, height: 12 }
                        "下载"
                    }
                }
                if template.is_premium {
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "w-full",
                        onclick: move |_| on_customize.call(customize_target.clone()),
                        "定制修改"
                    }
                }
            }
        }
    }
}

#[component]
fn TemplatePreview(
    template: TemplateRecord,
    on_close: EventHandler<()>,
    on_download: EventHandler<TemplateRecord>,
    on_customize: EventHandler<TemplateRecord>,
) -> Element {
    let download_target = template.clone();
    let customize_target = template.clone();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            width: "max-w-2xl",
            div {
                class: "p-6",
                h2 { class: "text-xl font-semibold mb-1", "{template.title}" }
                p { class: "text-sm text-neutral-500 mb-4", "{template.description}" }
                div {
                    class: "template-preview",
                    p { class: "whitespace-pre-line", "{template.preview}" }
                    div { class: "text-neutral-400 mt-4", "... 完整版本请下载查看" }
                }
                div {
                    class: "flex gap-2 mt-6",
                    Button {
                        onclick: move |_| on_download.call(download_target.clone()),
                        Icon { icon: FaDownload, width: 12, height: 12 }
                        "下载完整模板"
                    }
                    if template.is_premium {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_customize.call(customize_target.clone()),
                            "定制修改"
                        }
                    }
                }
            }
        }
    }
}
