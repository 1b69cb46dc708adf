//! Route pages.

pub mod charts;
pub mod configure_devices;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod platform;
pub mod platforms;

pub use charts::Charts;
pub use configure_devices::ConfigureDevices;
pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::PageNotFound;
pub use platform::Platform;
pub use platforms::Platforms;
