// Library exports for the desktop app and integration tests

pub mod api;
pub mod config;
pub mod filter;
pub mod listing;
pub mod sections;

#[doc(hidden)]
pub mod ui;

pub use config::Config;
pub use sections::Section;
