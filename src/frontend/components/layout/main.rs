//! Chrome around the protected pages.

use crate::frontend::app::main::Route;
use crate::frontend::components::gate::Gate;
use crate::frontend::components::layout::Navigation;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, use_route};

#[component]
pub fn PlatformManager() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { class: "platform-manager",
            div { class: "main",
                Navigation {}
                main { class: "content",
                    Gate { key: "{route}", route: route.clone(),
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
