//! Authorization store: who is logged in.

use crate::frontend::services::session::Session;
use crate::frontend::services::store::{ListenerId, Store};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthorizationState {
    pub session: Option<Session>,
}

#[derive(Clone, Default)]
pub struct AuthorizationStore {
    store: Store<AuthorizationState>,
}

impl AuthorizationStore {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            store: Store::new(AuthorizationState { session }),
        }
    }

    /// `true` while a session is present.
    pub fn get_authorization(&self) -> bool {
        self.store.read(|state| state.session.is_some())
    }

    pub fn session(&self) -> Option<Session> {
        self.store.read(|state| state.session.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.store
            .read(|state| state.session.as_ref().map(|s| s.username.clone()))
    }

    pub fn login(&self, session: Session) {
        log::info!("Logged in as {}", session.username);
        self.store.update(|state| state.session = Some(session));
    }

    pub fn logout(&self) {
        log::info!("Logged out");
        self.store.update(|state| state.session = None);
    }

    /// Drops the session without a change notification, as when a token
    /// lapses between renders.
    #[cfg(test)]
    pub(crate) fn expire_silently(&self) {
        self.store.replace_silently(AuthorizationState::default());
    }

    pub fn add_change_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.store.add_change_listener(listener)
    }

    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        self.store.remove_change_listener(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn login_and_logout_toggle_authorization() {
        let store = AuthorizationStore::default();
        assert!(!store.get_authorization());

        store.login(Session::new("admin", "token"));
        assert!(store.get_authorization());
        assert_eq!(store.username().as_deref(), Some("admin"));

        store.logout();
        assert!(!store.get_authorization());
        assert_eq!(store.session(), None);
    }

    #[test]
    fn silent_expiry_skips_listeners() {
        let store = AuthorizationStore::new(Some(Session::new("admin", "token")));
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        store.add_change_listener(move || counter.set(counter.get() + 1));

        store.expire_silently();
        assert!(!store.get_authorization());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn every_mutation_notifies() {
        let store = AuthorizationStore::new(Some(Session::new("admin", "token")));
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        store.add_change_listener(move || counter.set(counter.get() + 1));

        store.logout();
        store.login(Session::new("ops", "other"));
        assert_eq!(count.get(), 2);
    }
}
