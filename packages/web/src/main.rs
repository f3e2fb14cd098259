use dioxus::prelude::*;
use store::ScholarMatchConfig;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Baked in at build time; the browser has no filesystem to read it from.
const CONFIG_TOML: &str = include_str!("../scholarmatch.toml");

fn main() {
    let (config, config_error) = match ScholarMatchConfig::from_toml(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (ScholarMatchConfig::default(), Some(e)),
    };

    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {e}");
    }

    if let Some(e) = config_error {
        tracing::warn!(
            "Invalid {}, using defaults: {}",
            ScholarMatchConfig::filename(),
            e
        );
    }
    tracing::info!(%level, "starting ScholarMatch");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ScholarMatchConfig>();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::SessionProvider {
            config,
            ui::Screens {}
            ui::ToastStack {}
        }
    }
}
