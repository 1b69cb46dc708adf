//! Platform list and chart topic selection.

use crate::frontend::app::main::Route;
use crate::frontend::services::context::use_stores;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Splits the topic field into trimmed, non-empty topics.
fn parse_topics(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn Platforms() -> Element {
    let nav = navigator();
    let stores = use_stores();
    let mut uuid = use_signal(String::new);
    let mut topics = use_signal(String::new);

    let panels = stores.panels.clone();

    rsx! {
        div { class: "view platforms",
            h2 { "Platforms" }

            form {
                class: "platform-open",
                onsubmit: move |e| {
                    e.prevent_default();
                    let uuid = uuid.read().trim().to_string();
                    if !uuid.is_empty() {
                        nav.push(Route::Platform { uuid });
                    }
                },
                input {
                    r#type: "text",
                    placeholder: "Platform uuid",
                    value: "{uuid}",
                    oninput: move |e| uuid.set(e.value()),
                }
                button { r#type: "submit", "Open" }
            }

            form {
                class: "panel-check",
                onsubmit: move |e| {
                    e.prevent_default();
                    let selected = parse_topics(&topics.read());
                    if selected.is_empty() {
                        return;
                    }
                    topics.set(String::new());
                    panels.begin_check();
                    panels.complete_check(selected);
                },
                textarea {
                    placeholder: "Topics to chart, one per line",
                    value: "{topics}",
                    oninput: move |e| topics.set(e.value()),
                }
                button { r#type: "submit", "Chart" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_topics;

    #[test]
    fn topics_are_split_and_trimmed() {
        assert_eq!(
            parse_topics(" campus/fan/speed ,\n\ncampus/pump/flow\n"),
            vec!["campus/fan/speed", "campus/pump/flow"]
        );
        assert!(parse_topics(" , \n").is_empty());
    }
}
