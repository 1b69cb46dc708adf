//! Frontend services: stores, session persistence and the central service client.

pub mod authorization;
pub mod central;
pub mod context;
pub mod devices;
pub mod panels;
pub mod session;
pub mod store;
