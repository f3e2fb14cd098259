use api::{ApiError, Backend};
use dioxus::prelude::*;
use store::{Action, Credentials, LoginMethod, PendingKey};

use crate::components::{Button, ButtonVariant, Card, Label, FIELD_CLASS};
use crate::icons::{FaArrowLeft, FaEnvelope, FaQrcode, FaSpinner, FaWeixin};
use crate::session::{use_backend, use_session};
use crate::Icon;

/// Login screen with an email form and a simulated WeChat scan.
#[component]
pub fn AuthView() -> Element {
    let session = use_session();
    let backend = use_backend();
    let mut method = use_signal(|| LoginMethod::Email);
    let mut email = use_signal(String::new);

    let loading = session.is_pending(&PendingKey::Authenticate);

    let login = use_callback(move |credentials: Credentials| {
        if let Err(e) = credentials.validate() {
            session.fail(&ApiError::from(e));
            return;
        }
        if !session.begin(PendingKey::Authenticate) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            let result = backend.authenticate(credentials).await;
            session.finish(&PendingKey::Authenticate);
            match result {
                Ok(auth) => session.dispatch(Action::CompleteAuth(auth)),
                Err(e) => session.fail(&e),
            }
        });
    });

    let tab_class = |active: bool| {
        if active {
            "flex-1 flex items-center justify-center gap-2 py-2 rounded-md bg-white shadow-sm text-neutral-900"
        } else {
            "flex-1 flex items-center justify-center gap-2 py-2 rounded-md text-neutral-500"
        }
    };
    let email_tab = tab_class(method() == LoginMethod::Email);
    let wechat_tab = tab_class(method() == LoginMethod::WeChat);

    rsx! {
        div {
            class: "page-bg flex items-center justify-center px-4",
            Card {
                class: "w-full max-w-md p-8",
                button {
                    class: "flex items-center gap-1 text-sm text-neutral-500 mb-6 hover:text-neutral-800",
                    onclick: move |_| session.dispatch(Action::ReturnHome),
                    Icon { icon: FaArrowLeft, width: 12, height: 12 }
                    "返回首页"
                }
                h2 { class: "text-2xl font-bold text-center mb-2", "选择登录方式" }
                p { class: "text-center text-neutral-500 mb-6", "登录后即可获取您的专属奖学金匹配" }

                div {
                    class: "flex gap-1 p-1 bg-neutral-100 rounded-lg mb-6",
                    button {
                        class: email_tab,
                        onclick: move |_| method.set(LoginMethod::Email),
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                        "邮箱登录"
                    }
                    button {
                        class: wechat_tab,
                        onclick: move |_| method.set(LoginMethod::WeChat),
                        Icon { icon: FaWeixin, width: 14, height: 14 }
                        "微信登录"
                    }
                }

                {match method() {
                    LoginMethod::Email => rsx! {
                        div {
                            class: "space-y-4",
                            div {
                                class: "space-y-1.5",
                                Label { html_for: "login-email", "邮箱地址" }
                                input {
                                    id: "login-email",
                                    class: FIELD_CLASS,
                                    r#type: "email",
                                    placeholder: "请输入您的邮箱地址",
                                    value: email(),
                                    disabled: loading,
                                    oninput: move |evt: FormEvent| email.set(evt.value()),
                                    onkeydown: move |evt: KeyboardEvent| {
                                        if evt.key() == Key::Enter {
                                            login.call(Credentials::Email { email: email() });
                                        }
                                    },
                                }
                            }
                            Button {
                                class: "w-full",
                                disabled: loading,
                                onclick: move |_| login.call(Credentials::Email { email: email() }),
                                if loading {
                                    Icon { icon: FaSpinner, width: 14, height: 14, class: "animate-spin" }
                                    "登录中..."
                                } else {
                                    "登录"
                                }
                            }
                        }
                    },
                    LoginMethod::WeChat => rsx! {
                        div {
                            class: "text-center space-y-4",
                            div {
                                class: "wechat-qr",
                                Icon { icon: FaQrcode, width: 96, height: 96, class: "text-neutral-700" }
                            }
                            p { class: "text-sm text-neutral-500", "请使用微信扫描二维码登录" }
                            Button {
                                variant: ButtonVariant::Outline,
                                class: "w-full",
                                disabled: loading,
                                onclick: move |_| login.call(Credentials::WeChat),
                                if loading {
                                    Icon { icon: FaSpinner, width: 14, height: 14, class: "animate-spin" }
                                    "登录中..."
                                } else {
                                    "模拟微信登录"
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
