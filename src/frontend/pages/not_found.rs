use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "view not-found",
            h2 { "404 - Page not found" }
            p { "Nothing lives at {path}." }
        }
    }
}
