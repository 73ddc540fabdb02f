//! Dialog rendering - the one consumer of `DialogCoordinator` state.
//!
//! Components anywhere in the app open dialogs through the coordinator;
//! this module reads that state each frame and mounts the matching window.
//! Views hold only transient form input and call back into the coordinator
//! to take callbacks and close.

mod confirm;
mod help;
mod item_dialog;
mod status_toasts;

pub use confirm::{confirm, render_confirm_dialog};
pub use help::HelpDialog;
pub use item_dialog::{dialog_title, format_size, submit_edit, submit_file_select, ItemDialogView};
pub use status_toasts::render_status_toasts;
