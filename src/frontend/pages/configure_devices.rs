use crate::frontend::services::context::use_stores;
use dioxus::prelude::*;

#[component]
pub fn ConfigureDevices() -> Element {
    let stores = use_stores();

    let devices = stores.devices.clone();
    use_effect(move || devices.acknowledge_scan());

    let details = match stores.devices.last_scan() {
        Some(scan) => {
            let started = scan.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
            rsx! {
                dl { class: "scan-info",
                    dt { "Platform" }
                    dd { "{scan.platform_uuid}" }
                    dt { "Proxy" }
                    dd { "{scan.proxy_identity}" }
                    dt { "Started" }
                    dd { "{started}" }
                }
                p { class: "scan-note", "Devices answering the scan are reported by the platform." }
            }
        }
        None => rsx! {
            p { class: "empty", "No device scan has been started." }
        },
    };

    rsx! {
        div { class: "view configure-devices",
            h2 { "Configure devices" }
            {details}
        }
    }
}
