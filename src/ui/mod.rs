//! UI rendering modules for the AgriTech client.
//!
//! - `panels`: page navigation, chat list, file list
//! - `messages`: message area of the active chat
//! - `dialogs`: item/confirm dialogs driven by `DialogCoordinator`
//! - `theme`: color schemes and styling

pub mod dialogs;
pub mod messages;
pub mod panels;
pub mod theme;

pub use dialogs::*;
pub use messages::*;
pub use panels::*;
pub use theme::*;
