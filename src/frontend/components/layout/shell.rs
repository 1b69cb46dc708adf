//! Outermost layout: wires the stores to the router.

use crate::frontend::app::main::Route;
use crate::frontend::routing::{RouterNavigator, register_navigation_listeners};
use crate::frontend::services::context::{StoreRevision, Stores};
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, router};
use std::rc::Rc;

const STYLES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/dashboard.css"));

#[component]
pub fn Shell() -> Element {
    let stores = use_context::<Stores>();
    let revision = use_signal(|| 0u64);
    use_context_provider(|| StoreRevision(revision));

    let listeners = use_hook({
        let stores = stores.clone();
        move || {
            let navigation =
                register_navigation_listeners(&stores, Rc::new(RouterNavigator::new(router())));
            let refresh = stores.add_change_listener(move || {
                let mut revision = revision;
                *revision.write() += 1;
            });
            (navigation, refresh)
        }
    });

    use_drop(move || {
        let (navigation, refresh) = listeners;
        stores.remove_change_listeners(navigation);
        stores.remove_change_listeners(refresh);
    });

    rsx! {
        style { dangerous_inner_html: STYLES }
        Outlet::<Route> {}
    }
}
