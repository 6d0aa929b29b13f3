use dioxus::prelude::*;

use crate::comparison::{ChartExportPanel, ComparisonState, ComparisonToggle, MetricsPanel};
use crate::core::sim::ComparisonMode;

#[component]
pub fn Compare() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Platforms may provide a preloaded comparison set; otherwise show the demo.
    let provided = try_use_context::<Signal<ComparisonState>>();
    let fallback = use_signal(ComparisonState::demo);
    let state = provided.unwrap_or(fallback)();

    let mode = use_signal(ComparisonMode::default);
    let source = state.source.clone();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-compare",
            h1 { {crate::t!("page-compare-title")} }
            p { {crate::t!("page-compare-intro")} }
            p { class: "page-compare__source", {crate::t!("page-compare-source", source = source)} }
            if let Some(err) = state.error.as_ref() {
                p { class: "page-compare__error", "{err}" }
            }

            ComparisonToggle { mode }
            MetricsPanel {
                mode: mode(),
                with_result: state.set.with.clone(),
                without_result: state.set.without.clone(),
            }
            ChartExportPanel { mode: mode(), set: state.set.clone() }
        }
    }
}
