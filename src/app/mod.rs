//! Application module structure for AgriApp
//!
//! - `core`: AgriApp struct, initialization and settings persistence
//! - `events`: Event processing from the backend
//! - `dialogs`: Opening dialogs through the coordinator and rendering them
//! - `update`: Main update loop and global shortcuts
//! - `ui::auth`: Login / registration screen
//! - `ui::panels`: Top bar, side panel and page rendering
//! - `ui::input`: Chat composer with history and slash commands

pub mod core;
pub mod dialogs;
pub mod events;
pub mod ui;
pub mod update;

pub use core::{AgriApp, AppCommand};
