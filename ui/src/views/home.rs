use dioxus::prelude::*;

use crate::core::sim::SIMULATION_DURATION_SEC;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let run_length = crate::t!(
        "home-run-length",
        seconds = SIMULATION_DURATION_SEC.to_string()
    );

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-tagline")} }
            p { {crate::t!("home-intro")} }
            p { class: "page-home__meta", "{run_length}" }
            p { class: "page-home__cta", {crate::t!("home-cta")} }
        }
    }
}
