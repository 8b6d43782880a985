// Library surface for the binary and the integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod game;
pub mod logging;
pub mod runtime;
pub mod ui;
pub mod word_source;

pub use app::{App, AppAction, Screen};
