//! Frontend module for the dashboard.

pub mod app;
pub mod components;
pub mod pages;
pub mod routing;
pub mod services;
