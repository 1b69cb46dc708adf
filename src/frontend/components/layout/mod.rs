//! Layout components.

pub mod auth;
pub mod main;
pub mod nav;
pub mod shell;

pub use auth::PublicExterior;
pub use main::PlatformManager;
pub use nav::Navigation;
pub use shell::Shell;
