//! Store container handed to the view tree.

use crate::frontend::services::authorization::AuthorizationStore;
use crate::frontend::services::devices::DevicesStore;
use crate::frontend::services::panels::PlatformsPanelStore;
use crate::frontend::services::session::Session;
use crate::frontend::services::store::ListenerId;
use crate::utils::config::DashboardConfig;
use dioxus::prelude::*;

/// The dashboard's stores. Built once at the root and provided as context,
/// so nothing reaches for process-wide state.
#[derive(Clone, Default)]
pub struct Stores {
    pub authorization: AuthorizationStore,
    pub panels: PlatformsPanelStore,
    pub devices: DevicesStore,
}

impl Stores {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            authorization: AuthorizationStore::new(session),
            ..Self::default()
        }
    }

    /// Calls `listener` after a change in any of the stores.
    pub fn add_change_listener(&self, listener: impl Fn() + Clone + 'static) -> StoreListeners {
        StoreListeners {
            authorization: self.authorization.add_change_listener(listener.clone()),
            panels: self.panels.add_change_listener(listener.clone()),
            devices: self.devices.add_change_listener(listener),
        }
    }

    pub fn remove_change_listeners(&self, ids: StoreListeners) {
        self.authorization.remove_change_listener(ids.authorization);
        self.panels.remove_change_listener(ids.panels);
        self.devices.remove_change_listener(ids.devices);
    }
}

/// One listener id per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreListeners {
    pub authorization: ListenerId,
    pub panels: ListenerId,
    pub devices: ListenerId,
}

/// Startup data handed to the app through the launch context.
#[derive(Debug, Clone)]
pub struct LaunchState {
    pub config: DashboardConfig,
    pub session: Option<Session>,
}

/// Bumped on every store change so components reading it re-render.
#[derive(Clone, Copy)]
pub struct StoreRevision(pub Signal<u64>);

/// Returns the stores and subscribes the calling component to store changes.
pub fn use_stores() -> Stores {
    let stores = use_context::<Stores>();
    if let Some(StoreRevision(revision)) = try_use_context::<StoreRevision>() {
        let _ = revision();
    }
    stores
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn aggregate_listener_sees_every_store() {
        let stores = Stores::default();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let ids = stores.add_change_listener(move || counter.set(counter.get() + 1));

        stores.authorization.login(Session::new("admin", "token"));
        stores.panels.complete_check(Vec::new());
        stores.devices.start_scan("platform-1", "platform.bacnet_proxy");
        assert_eq!(count.get(), 3);

        stores.remove_change_listeners(ids);
        stores.authorization.logout();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn seeded_session_is_authorized() {
        let stores = Stores::new(Some(Session::new("admin", "token")));
        assert!(stores.authorization.get_authorization());
        assert!(!stores.panels.get_last_check());
        assert!(!stores.devices.get_new_scan());
    }
}
