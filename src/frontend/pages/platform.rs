//! Single platform view with the device scan trigger.

use crate::frontend::services::central::CentralClient;
use crate::frontend::services::context::use_stores;
use crate::utils::config::DashboardConfig;
use dioxus::prelude::*;

const DEFAULT_PROXY_IDENTITY: &str = "platform.bacnet_proxy";

#[component]
pub fn Platform(uuid: String) -> Element {
    let stores = use_stores();
    let config = use_context::<DashboardConfig>();
    let mut proxy = use_signal(|| DEFAULT_PROXY_IDENTITY.to_string());
    let mut error = use_signal(|| None::<String>);

    let scanned_here = stores
        .devices
        .last_scan()
        .is_some_and(|scan| scan.platform_uuid == uuid);

    let on_scan = {
        let uuid = uuid.clone();
        let stores = stores.clone();
        move |_: MouseEvent| {
            let Some(session) = stores.authorization.session() else {
                return;
            };
            let proxy_identity = proxy.read().trim().to_string();
            let platform_uuid = uuid.clone();
            let central_url = config.central_url.clone();
            let devices = stores.devices.clone();
            error.set(None);

            spawn(async move {
                let result = match CentralClient::new(&central_url) {
                    Ok(client) => {
                        client
                            .start_bacnet_scan(&session, &platform_uuid, &proxy_identity)
                            .await
                    }
                    Err(e) => Err(e),
                };
                match result {
                    // The devices listener moves to the configure view.
                    Ok(()) => devices.start_scan(platform_uuid, proxy_identity),
                    Err(e) => {
                        log::error!("Failed to start device scan on {platform_uuid}: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "view platform",
            h2 { "Platform {uuid}" }
            if scanned_here {
                p { class: "platform-note", "A device scan was started on this platform." }
            }
            div { class: "scan-controls",
                input {
                    r#type: "text",
                    value: "{proxy}",
                    oninput: move |e| proxy.set(e.value()),
                }
                button { class: "scan-button", onclick: on_scan, "Scan for devices" }
            }
            if let Some(message) = error() {
                div { class: "error-message error-visible", "{message}" }
            }
        }
    }
}
