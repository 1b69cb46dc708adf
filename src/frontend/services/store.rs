//! Change-notifying state holder shared by the dashboard stores.
//!
//! A `Store` is a cheap, cloneable handle. All clones observe the same state
//! and the same listener list. Listeners run synchronously, in registration
//! order, after the state borrow has been released, so a listener may read
//! (or even update) the store it is registered on.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by [`Store::add_change_listener`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

struct Inner<S> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

pub struct Store<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Reads the current state.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Mutates the state and notifies every listener.
    pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.inner.state.borrow_mut());
        self.emit_change();
        result
    }

    /// Swaps the state without notifying anyone.
    #[cfg(test)]
    pub(crate) fn replace_silently(&self, state: S) {
        *self.inner.state.borrow_mut() = state;
    }

    pub fn add_change_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Returns `false` if the listener was already removed.
    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Broadcasts a change without mutating.
    pub fn emit_change(&self) {
        // Snapshot so listeners can register or remove listeners while running.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener();
        }
    }
}
