use crate::frontend::app::main::Route;
use crate::frontend::components::gate::Gate;
use crate::frontend::components::layout::Navigation;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, use_route};

#[component]
pub fn PublicExterior() -> Element {
    let route = use_route::<Route>();

    rsx! {
        div { class: "public-exterior not-logged-in",
            div { class: "main",
                Navigation {}
                Gate { key: "{route}", route: route.clone(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
