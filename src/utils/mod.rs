//! Custom utilities.

pub mod config;
pub mod dirs;
pub mod error;
