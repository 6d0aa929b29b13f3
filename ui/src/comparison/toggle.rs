use dioxus::prelude::*;

use crate::{core::sim::ComparisonMode, t};

pub fn mode_label(mode: ComparisonMode) -> String {
    match mode {
        ComparisonMode::With => t!("mode-with"),
        ComparisonMode::Without => t!("mode-without"),
        ComparisonMode::Both => t!("mode-both"),
    }
}

/// Three-way selector driving the panel's `ComparisonMode`.
#[component]
pub fn ComparisonToggle(mode: Signal<ComparisonMode>) -> Element {
    let mut mode = mode;
    let current = mode();

    rsx! {
        div { class: "mode-toggle", role: "group",
            span { class: "mode-toggle__label", {t!("mode-label")} }
            for option in ComparisonMode::ALL {
                button {
                    key: "{option}",
                    r#type: "button",
                    class: if option == current { "mode-toggle__button mode-toggle__button--active" } else { "mode-toggle__button" },
                    aria_pressed: if option == current { "true" } else { "false" },
                    onclick: move |_| mode.set(option),
                    "{mode_label(option)}"
                }
            }
        }
    }
}
