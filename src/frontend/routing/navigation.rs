//! Router abstraction used by the store listeners.

use crate::frontend::app::main::Route;
use dioxus_router::RouterContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Redirect without adding a history entry.
    Replace(Route),
    Push(Route),
}

pub trait Navigate {
    fn is_active(&self, route: &Route) -> bool;
    fn replace(&self, route: Route);
    fn push(&self, route: Route);

    fn apply(&self, navigation: Navigation) {
        match navigation {
            Navigation::Replace(route) => self.replace(route),
            Navigation::Push(route) => self.push(route),
        }
    }
}

/// [`Navigate`] backed by the running Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    router: RouterContext,
}

impl RouterNavigator {
    pub fn new(router: RouterContext) -> Self {
        Self { router }
    }
}

impl Navigate for RouterNavigator {
    fn is_active(&self, route: &Route) -> bool {
        self.router.current::<Route>() == *route
    }

    fn replace(&self, route: Route) {
        log::debug!("Redirecting to {route}");
        self.router.replace(route);
    }

    fn push(&self, route: Route) {
        log::debug!("Navigating to {route}");
        self.router.push(route);
    }
}

/// Navigation decision after an authorization change.
pub fn redirect_for_authorization(authorized: bool, router: &dyn Navigate) -> Option<Navigation> {
    let on_login = router.is_active(&Route::login());
    match (authorized, on_login) {
        (true, true) => Some(Navigation::Replace(Route::after_login())),
        (false, false) => Some(Navigation::Replace(Route::login())),
        _ => None,
    }
}

/// Navigation decision after the platforms panel changes.
pub fn redirect_for_panel_check(
    last_check: bool,
    authorized: bool,
    router: &dyn Navigate,
) -> Option<Navigation> {
    let charts = Route::Charts {};
    (last_check && authorized && !router.is_active(&charts)).then_some(Navigation::Push(charts))
}

/// Navigation decision after the devices store changes.
pub fn redirect_for_device_scan(new_scan: bool, router: &dyn Navigate) -> Option<Navigation> {
    let configure = Route::ConfigureDevices {};
    (new_scan && !router.is_active(&configure)).then_some(Navigation::Push(configure))
}
