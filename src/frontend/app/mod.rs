//! Application root and route table.

pub mod main;

pub use main::App;
