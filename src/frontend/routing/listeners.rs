//! Store listeners that keep the router in step with store state.

use crate::frontend::routing::navigation::{
    Navigate, redirect_for_authorization, redirect_for_device_scan, redirect_for_panel_check,
};
use crate::frontend::services::context::{StoreListeners, Stores};
use std::rc::Rc;

/// Registers the authorization, panel-check and device-scan listeners, in
/// that order. Pass the returned ids to `Stores::remove_change_listeners`
/// to detach them.
pub fn register_navigation_listeners(stores: &Stores, router: Rc<dyn Navigate>) -> StoreListeners {
    let authorization = {
        let auth = stores.authorization.clone();
        let router = Rc::clone(&router);
        stores.authorization.add_change_listener(move || {
            if let Some(navigation) = redirect_for_authorization(auth.get_authorization(), &*router) {
                router.apply(navigation);
            }
        })
    };

    let panels = {
        let auth = stores.authorization.clone();
        let panels_store = stores.panels.clone();
        let router = Rc::clone(&router);
        stores.panels.add_change_listener(move || {
            let navigation = redirect_for_panel_check(
                panels_store.get_last_check(),
                auth.get_authorization(),
                &*router,
            );
            if let Some(navigation) = navigation {
                router.apply(navigation);
            }
        })
    };

    let devices = {
        let devices_store = stores.devices.clone();
        stores.devices.add_change_listener(move || {
            if let Some(navigation) = redirect_for_device_scan(devices_store.get_new_scan(), &*router) {
                router.apply(navigation);
            }
        })
    };

    StoreListeners {
        authorization,
        panels,
        devices,
    }
}
