//! Route guards and store-driven navigation.

pub mod gate;
pub mod listeners;
pub mod navigation;

pub use gate::{Access, GateDecision};
pub use listeners::register_navigation_listeners;
pub use navigation::RouterNavigator;
