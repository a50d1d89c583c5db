// Library exports for the two desktop binaries and integration tests

pub mod api;
pub mod config;
pub mod forms;
pub mod ui;

pub use config::Config;
