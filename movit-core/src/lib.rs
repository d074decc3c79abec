pub mod app;
pub mod catalog;
pub mod error;
pub mod handlers;
pub mod key_event;
pub mod session;
pub mod style;
pub mod types;
pub mod ui;
pub mod utils;
