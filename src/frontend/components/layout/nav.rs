use crate::frontend::app::main::Route;
use crate::frontend::services::context::use_stores;
use crate::frontend::services::session::Session;
use crate::utils::config::DashboardConfig;
use dioxus::prelude::*;
use dioxus_router::{components::Link, use_route};
use std::mem::discriminant;

#[component]
pub fn Navigation() -> Element {
    let route = use_route::<Route>();
    let stores = use_stores();
    let config = use_context::<DashboardConfig>();
    let title = config.title.clone();

    let Some(username) = stores.authorization.username() else {
        return rsx! {
            nav { class: "navigation",
                h1 { class: "logo", "{title}" }
            }
        };
    };

    let tab_class = |tab: &Route| {
        if discriminant(tab) == discriminant(&route) {
            "nav-item active"
        } else {
            "nav-item"
        }
    };
    let dashboard_class = tab_class(&Route::Dashboard {});
    let platforms_class = tab_class(&Route::Platforms {});
    let charts_class = tab_class(&Route::Charts {});

    let authorization = stores.authorization.clone();
    let session_dir = config.session_dir();
    let on_logout = move |_: MouseEvent| {
        let authorization = authorization.clone();
        let dir = session_dir.clone();
        // Delete first: logging out navigates away and drops this component's tasks.
        spawn(async move {
            if let Err(e) = Session::delete(&dir).await {
                log::error!("Failed to delete saved session: {e}");
            }
            authorization.logout();
        });
    };

    rsx! {
        nav { class: "navigation",
            h1 { class: "logo", "{title}" }
            ul { class: "nav-items",
                li { class: dashboard_class,
                    Link { to: Route::Dashboard {}, "Dashboard" }
                }
                li { class: platforms_class,
                    Link { to: Route::Platforms {}, "Platforms" }
                }
                li { class: charts_class,
                    Link { to: Route::Charts {}, "Charts" }
                }
                li { class: "nav-item nav-user",
                    span { class: "nav-text", "{username}" }
                    button { class: "logout-button", onclick: on_logout, "Log out" }
                }
            }
        }
    }
}
