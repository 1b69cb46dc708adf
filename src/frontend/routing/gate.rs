//! Authentication gate.
//!
//! Every route declares an [`Access`] level (see `Route::access`). The gate
//! turns that level plus the current authorization into a decision, which the
//! `Gate` component applies once when a route's view mounts.

use crate::frontend::app::main::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only reachable while logged out, e.g. the login form.
    Public,
    /// Requires a login.
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Replace the current history entry with this route.
    Redirect(Route),
}

pub fn gate(access: Access, authorized: bool) -> GateDecision {
    match (access, authorized) {
        (Access::Protected, false) => GateDecision::Redirect(Route::login()),
        (Access::Public, true) => GateDecision::Redirect(Route::after_login()),
        _ => GateDecision::Render,
    }
}

/// Decision for `route`. Routes without an access level always render.
pub fn gate_route(route: &Route, authorized: bool) -> GateDecision {
    route
        .access()
        .map_or(GateDecision::Render, |access| gate(access, authorized))
}
