use crate::frontend::services::context::use_stores;
use dioxus::prelude::*;

#[component]
pub fn Charts() -> Element {
    let stores = use_stores();
    let topics = stores.panels.checked_topics();

    // Consume the completed check so later panel updates don't re-trigger.
    let panels = stores.panels.clone();
    use_effect(move || {
        if panels.get_last_check() {
            panels.begin_check();
        }
    });

    rsx! {
        div { class: "view charts",
            h2 { "Charts" }
            if topics.is_empty() {
                p { class: "empty", "Select topics on the platforms page to chart them." }
            }
            for topic in topics.iter() {
                div { key: "{topic}", class: "chart-card",
                    span { class: "chart-topic", "{topic}" }
                }
            }
        }
    }
}
