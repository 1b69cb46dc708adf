//! Gate component applying the route's access check.

use crate::frontend::app::main::Route;
use crate::frontend::routing::GateDecision;
use crate::frontend::routing::gate::gate_route;
use crate::frontend::services::context::Stores;
use dioxus::prelude::*;
use dioxus_router::navigator;

/// Renders `children` if `route` may be shown, otherwise redirects.
///
/// The check runs once per mount; give the gate a `key` derived from the
/// route so it remounts on navigation.
#[component]
pub fn Gate(route: Route, children: Element) -> Element {
    let nav = navigator();
    let stores = use_context::<Stores>();
    let decision = use_hook(|| gate_route(&route, stores.authorization.get_authorization()));

    let pending = decision.clone();
    use_effect(move || {
        if let GateDecision::Redirect(target) = pending.clone() {
            nav.replace(target);
        }
    });

    match decision {
        GateDecision::Render => rsx! { {children} },
        GateDecision::Redirect(_) => rsx! { div {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::session::Session;
    use crate::utils::config::DashboardConfig;
    use dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use dioxus_history::{History, MemoryHistory};
    use dioxus_router::Router;
    use std::rc::Rc;
    use std::time::Duration;

    #[component]
    fn TestRoot() -> Element {
        rsx! {
            Router::<Route> {}
        }
    }

    fn mount(path: &str, stores: &Stores) -> (VirtualDom, Rc<MemoryHistory>) {
        let history = Rc::new(MemoryHistory::with_initial_path(path));
        let mut dom = VirtualDom::new(TestRoot)
            .with_root_context(stores.clone())
            .with_root_context(DashboardConfig::default())
            .with_root_context(history.clone() as Rc<dyn History>);
        dom.rebuild_in_place();
        (dom, history)
    }

    /// Runs renders and effects until the dom goes idle.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn logged_in() -> Stores {
        Stores::new(Some(Session::new("admin", "token")))
    }

    #[tokio::test]
    async fn protected_visit_while_logged_out_replaces_with_login() {
        let stores = Stores::default();
        let (mut dom, history) = mount("/dashboard", &stores);
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/login");
        assert!(!history.can_go_back());
    }

    #[tokio::test]
    async fn every_protected_route_is_gated() {
        for path in ["/platforms", "/platform/a", "/configure-devices", "/charts"] {
            let stores = Stores::default();
            let (mut dom, history) = mount(path, &stores);
            settle(&mut dom).await;

            assert_eq!(history.current_route(), "/login", "{path}");
            assert!(!history.can_go_back(), "{path}");
        }
    }

    #[tokio::test]
    async fn login_visit_while_logged_in_replaces_with_dashboard() {
        let stores = logged_in();
        let (mut dom, history) = mount("/login", &stores);
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/dashboard");
        assert!(!history.can_go_back());
    }

    #[tokio::test]
    async fn allowed_visits_stay_put() {
        let (mut dom, history) = mount("/login", &Stores::default());
        settle(&mut dom).await;
        assert_eq!(history.current_route(), "/login");

        let (mut dom, history) = mount("/platform/a", &logged_in());
        settle(&mut dom).await;
        assert_eq!(history.current_route(), "/platform/a");
    }

    #[tokio::test]
    async fn unknown_path_renders_regardless_of_login() {
        for stores in [Stores::default(), logged_in()] {
            let (mut dom, history) = mount("/no/such/page", &stores);
            settle(&mut dom).await;
            assert_eq!(history.current_route(), "/no/such/page");
        }
    }

    #[tokio::test]
    async fn gate_runs_again_for_each_route_in_a_layout() {
        let stores = logged_in();
        let (mut dom, history) = mount("/platform/a", &stores);
        settle(&mut dom).await;
        assert_eq!(history.current_route(), "/platform/a");

        // No authorization broadcast, so only a fresh gate can notice.
        stores.authorization.expire_silently();
        // The device-scan listener pushes to another page of the same layout.
        dom.in_scope(ScopeId::ROOT, || {
            stores.devices.start_scan("a", "platform.bacnet_proxy");
        });
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/login");
        assert!(history.can_go_back());
    }
}
