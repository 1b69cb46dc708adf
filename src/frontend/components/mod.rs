//! UI components.

pub mod gate;
pub mod layout;
