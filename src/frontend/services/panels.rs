//! Platforms panel store: tracks whether a chart check has completed.

use crate::frontend::services::store::{ListenerId, Store};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PanelsState {
    pub last_check: bool,
    /// Topics selected for charting by the most recent check.
    pub checked_topics: Vec<String>,
}

#[derive(Clone, Default)]
pub struct PlatformsPanelStore {
    store: Store<PanelsState>,
}

impl PlatformsPanelStore {
    pub fn get_last_check(&self) -> bool {
        self.store.read(|state| state.last_check)
    }

    pub fn checked_topics(&self) -> Vec<String> {
        self.store.read(|state| state.checked_topics.clone())
    }

    /// Clears the flag ahead of a new check.
    pub fn begin_check(&self) {
        self.store.update(|state| state.last_check = false);
    }

    pub fn complete_check(&self, topics: Vec<String>) {
        log::debug!("Panel check completed with {} topic(s)", topics.len());
        self.store.update(|state| {
            state.last_check = true;
            state.checked_topics = topics;
        });
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

    #[test]
    fn check_cycle() {
        let panels = PlatformsPanelStore::default();
        assert!(!panels.get_last_check());

        panels.complete_check(vec!["campus/building/fan/speed".to_string()]);
        assert!(panels.get_last_check());
        assert_eq!(panels.checked_topics().len(), 1);

        panels.begin_check();
        assert!(!panels.get_last_check());
        assert_eq!(panels.checked_topics().len(), 1);
    }
}
