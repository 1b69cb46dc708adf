//! Devices store: the most recent device scan.

use crate::frontend::services::store::{ListenerId, Store};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceScan {
    pub platform_uuid: String,
    /// Identity of the BACnet proxy agent answering the scan.
    pub proxy_identity: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DevicesState {
    pub new_scan: bool,
    pub scan: Option<DeviceScan>,
}

#[derive(Clone, Default)]
pub struct DevicesStore {
    store: Store<DevicesState>,
}

impl DevicesStore {
    pub fn get_new_scan(&self) -> bool {
        self.store.read(|state| state.new_scan)
    }

    pub fn last_scan(&self) -> Option<DeviceScan> {
        self.store.read(|state| state.scan.clone())
    }

    /// Records a scan started on `platform_uuid`, replacing the previous one.
    pub fn start_scan(&self, platform_uuid: impl Into<String>, proxy_identity: impl Into<String>) {
        let scan = DeviceScan {
            platform_uuid: platform_uuid.into(),
            proxy_identity: proxy_identity.into(),
            started_at: Utc::now(),
        };
        log::info!(
            "Device scan started on platform {} through {}",
            scan.platform_uuid,
            scan.proxy_identity
        );
        self.store.update(|state| {
            state.new_scan = true;
            state.scan = Some(scan);
        });
    }

    /// Marks the latest scan as seen so it no longer triggers navigation.
    pub fn acknowledge_scan(&self) {
        if self.get_new_scan() {
            self.store.update(|state| state.new_scan = false);
        }
    }

    pub fn add_change_listener(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.store.add_change_listener(listener)
    }

    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        self.store.remove_change_listener(id)
    }
}
