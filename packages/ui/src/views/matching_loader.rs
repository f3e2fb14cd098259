use api::delay::sleep_ms;
use dioxus::prelude::*;
use store::loader::STEPS;
use store::{Action, LoaderProgress, Tick};

use crate::components::ProgressBar;
use crate::icons::{FaCircleCheck, FaGraduationCap};
use crate::session::{use_config, use_session};
use crate::Icon;

/// Full-screen progress shown the first time results are reached.
///
/// Two timers drive [`LoaderProgress`]: a fast one for the percentage and a
/// slow one for the step label. Both are dropped with the component, so
/// navigating away mid-load leaves nothing running.
#[component]
pub fn MatchingLoader(name: String) -> Element {
    let session = use_session();
    let config = use_config().loader;
    let mut progress = use_signal(|| LoaderProgress::new(config.progress_step));

    let tick_ms = config.tick_ms;
    let complete_delay_ms = config.complete_delay_ms;
    use_future(move || async move {
        loop {
            sleep_ms(tick_ms).await;
            let tick = progress.write().tick();
            match tick {
                Tick::Running => {}
                Tick::Finished => {
                    tracing::debug!("matching loader complete");
                    sleep_ms(complete_delay_ms).await;
                    session.dispatch(Action::LoaderFinished);
                    break;
                }
                Tick::Idle => break,
            }
        }
    });

    let step_ms = config.step_ms;
    use_future(move || async move {
        while !progress.peek().is_finished() {
            sleep_ms(step_ms).await;
            progress.write().rotate_step();
        }
    });

    let p = progress();
    let percent = p.percent();
    let current = p.step_index();
    let finished = p.is_finished();
    let step = p.step_label();

    rsx! {
        div {
            class: "loader-screen",
            div {
                class: "loader-card",
                div {
                    class: "hero-icon animate-pulse mb-6",
                    Icon { icon: FaGraduationCap, width: 48, height: 48, class: "text-white" }
                }
                h2 { class: "text-2xl font-bold mb-2", "你好，{name}！" }
                p {
                    class: "text-neutral-500 mb-8",
                    if finished { "匹配完成，正在整理结果..." } else { "{step}" }
                }
                ProgressBar { value: percent, class: "mb-2" }
                p { class: "text-sm text-neutral-600 mb-6", "{percent}% 完成" }
                ul {
                    class: "space-y-2 text-left",
                    for (i, label) in STEPS.iter().enumerate() {
                        li {
                            key: "{i}",
                            class: if i == current { "loader-step active" } else { "loader-step" },
                            if finished {
                                Icon { icon: FaCircleCheck, width: 14, height: 14, class: "text-green-500" }
                            }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
