//! Small styled primitives shared by every screen.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary-600 text-white hover:bg-primary-700",
            ButtonVariant::Outline => {
                "bg-white border border-neutral-300 text-neutral-700 hover:bg-neutral-50"
            }
            ButtonVariant::Ghost => "bg-transparent text-neutral-600 hover:bg-neutral-100",
            ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded-md px-4 py-2 text-sm font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
    rsx! {
        button {
            class: "{base} {variant.class()} {class}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(value: u8, #[props(default)] class: String) -> Element {
    let width = value.min(100);
    rsx! {
        div {
            class: "w-full h-2 rounded-full bg-neutral-200 overflow-hidden {class}",
            div {
                class: "h-full bg-primary-600 transition-all",
                style: "width: {width}%",
            }
        }
    }
}

#[component]
pub fn Badge(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium {class}",
            {children}
        }
    }
}

/// Shared look for text inputs, selects, and textareas.
pub const FIELD_CLASS: &str = "w-full bg-white border border-neutral-300 rounded px-3 py-2 text-sm text-neutral-800 outline-none font-[inherit] focus:border-primary-500 focus:shadow-[0_0_0_1px_var(--color-primary-500)]";

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "block text-sm font-medium text-neutral-700",
            {children}
        }
    }
}

/// Card-shaped container used for every panel on the results and portal screens.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg border border-neutral-200 shadow-sm {class}",
            {children}
        }
    }
}
