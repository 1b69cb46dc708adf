use crate::frontend::services::context::use_stores;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let stores = use_stores();
    let username = stores.authorization.username().unwrap_or_default();
    let topics = stores.panels.checked_topics().len();
    let last_scan = stores
        .devices
        .last_scan()
        .map_or_else(|| "none".to_string(), |scan| scan.platform_uuid);

    rsx! {
        div { class: "view dashboard",
            h2 { "Dashboard" }
            p { class: "welcome-text", "Signed in as {username}" }
            div { class: "dashboard-summary",
                div { class: "summary-card",
                    span { class: "summary-value", "{topics}" }
                    span { class: "summary-label", "charted topics" }
                }
                div { class: "summary-card",
                    span { class: "summary-value", "{last_scan}" }
                    span { class: "summary-label", "last scanned platform" }
                }
            }
        }
    }
}
