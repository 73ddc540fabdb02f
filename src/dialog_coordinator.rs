//! Central dialog state for the whole application.
//!
//! `DialogCoordinator` is the single source of truth for which overlay is
//! visible and with what parameters. It tracks two independent overlays:
//!
//! - the item dialog (create/select/preview/edit a chat or a file)
//! - the confirm dialog (accept/cancel for destructive actions)
//!
//! The coordinator is constructed by the app root and passed down by `&mut`.
//! It stores callbacks but never calls them: the dialog renderer takes a
//! callback out of its slot, invokes it, then closes the dialog.

use std::fmt;

use tracing::debug;

use crate::protocol::FileRef;

/// Single-use handle invoked with the text the user entered or picked.
pub type EditCallback = Box<dyn FnOnce(String)>;
/// Single-use handle invoked with the file the user picked.
pub type FileSelectCallback = Box<dyn FnOnce(FileRef)>;
/// Single-use handle invoked when the user accepts a confirm dialog.
pub type ConfirmCallback = Box<dyn FnOnce()>;

/// Entity an item dialog operates on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityKind {
    #[default]
    Chat,
    File,
}

/// Sub-view the renderer mounts for an item dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DialogMode {
    #[default]
    Create,
    Select,
    Preview,
    Edit,
}

/// Everything the renderer needs to show one item dialog.
///
/// `Default` is the idle shape: chat/create, empty seed, no ids, no callbacks.
#[derive(Default)]
pub struct ItemDialogRequest {
    pub kind: EntityKind,
    pub mode: DialogMode,
    pub initial_value: String,
    pub item_id: Option<String>,
    pub selected_file: Option<FileRef>,
    pub content_url: Option<String>,
    on_edit: Option<EditCallback>,
    on_file_select: Option<FileSelectCallback>,
}

impl ItemDialogRequest {
    pub fn new(kind: EntityKind, mode: DialogMode) -> Self {
        Self {
            kind,
            mode,
            ..Self::default()
        }
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    pub fn with_item_id(mut self, id: impl Into<String>) -> Self {
        self.item_id = Some(id.into());
        self
    }

    pub fn with_selected_file(mut self, file: FileRef) -> Self {
        self.selected_file = Some(file);
        self
    }

    pub fn with_content_url(mut self, url: impl Into<String>) -> Self {
        self.content_url = Some(url.into());
        self
    }

    pub fn on_edit(mut self, callback: impl FnOnce(String) + 'static) -> Self {
        self.on_edit = Some(Box::new(callback));
        self
    }

    pub fn on_file_select(mut self, callback: impl FnOnce(FileRef) + 'static) -> Self {
        self.on_file_select = Some(Box::new(callback));
        self
    }

    pub fn has_edit_callback(&self) -> bool {
        self.on_edit.is_some()
    }

    pub fn has_file_select_callback(&self) -> bool {
        self.on_file_select.is_some()
    }
}

impl fmt::Debug for ItemDialogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemDialogRequest")
            .field("kind", &self.kind)
            .field("mode", &self.mode)
            .field("initial_value", &self.initial_value)
            .field("item_id", &self.item_id)
            .field("selected_file", &self.selected_file)
            .field("content_url", &self.content_url)
            .field("on_edit", &self.on_edit.is_some())
            .field("on_file_select", &self.on_file_select.is_some())
            .finish()
    }
}

/// Item dialog request plus its visibility flag.
#[derive(Debug, Default)]
pub struct ItemDialogState {
    pub is_open: bool,
    pub request: ItemDialogRequest,
}

/// Prompt text and the action to run when the user accepts.
#[derive(Default)]
pub struct ConfirmRequest {
    pub message: String,
    on_confirm: Option<ConfirmCallback>,
}

impl ConfirmRequest {
    pub fn has_confirm_callback(&self) -> bool {
        self.on_confirm.is_some()
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("message", &self.message)
            .field("on_confirm", &self.on_confirm.is_some())
            .finish()
    }
}

/// Confirm request plus its visibility flag.
#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pub is_open: bool,
    pub request: ConfirmRequest,
}

/// Owns the state of the item dialog, the confirm dialog and the current
/// file selection.
///
/// The two dialogs are independent Closed/Open machines. Opening an already
/// open dialog replaces its request wholesale; the replaced callbacks are
/// dropped without being called.
#[derive(Debug, Default)]
pub struct DialogCoordinator {
    item: ItemDialogState,
    confirm: ConfirmDialogState,
    selected_file: Option<FileRef>,
    /// Bumped on every `open_item_dialog` so views can re-seed their inputs.
    item_generation: u64,
}

impl DialogCoordinator {
    /// Create a coordinator with both dialogs closed and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the item dialog, replacing whatever request was live.
    pub fn open_item_dialog(&mut self, request: ItemDialogRequest) {
        debug!(
            kind = ?request.kind,
            mode = ?request.mode,
            item_id = ?request.item_id,
            replacing = self.item.is_open,
            "opening item dialog"
        );
        self.item = ItemDialogState {
            is_open: true,
            request,
        };
        self.item_generation = self.item_generation.wrapping_add(1);
    }

    /// Close the item dialog and reset it to the idle shape.
    pub fn close_item_dialog(&mut self) {
        if self.item.is_open {
            debug!(kind = ?self.item.request.kind, "closing item dialog");
        }
        self.item = ItemDialogState::default();
    }

    /// Open the confirm dialog, discarding any pending confirmation.
    pub fn open_confirm_dialog(
        &mut self,
        message: impl Into<String>,
        on_confirm: impl FnOnce() + 'static,
    ) {
        let message = message.into();
        debug!(%message, replacing = self.confirm.is_open, "opening confirm dialog");
        self.confirm = ConfirmDialogState {
            is_open: true,
            request: ConfirmRequest {
                message,
                on_confirm: Some(Box::new(on_confirm)),
            },
        };
    }

    /// Close the confirm dialog and reset it to the idle shape.
    pub fn close_confirm_dialog(&mut self) {
        if self.confirm.is_open {
            debug!("closing confirm dialog");
        }
        self.confirm = ConfirmDialogState::default();
    }

    pub fn item_dialog(&self) -> &ItemDialogState {
        &self.item
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn item_generation(&self) -> u64 {
        self.item_generation
    }

    /// Move the edit callback out of the live request.
    pub fn take_edit_callback(&mut self) -> Option<EditCallback> {
        self.item.request.on_edit.take()
    }

    /// Move the file-select callback out of the live request.
    pub fn take_file_select_callback(&mut self) -> Option<FileSelectCallback> {
        self.item.request.on_file_select.take()
    }

    /// Move the confirm callback out of the pending confirmation.
    pub fn take_confirm_callback(&mut self) -> Option<ConfirmCallback> {
        self.confirm.request.on_confirm.take()
    }

    /// Remember the active file selection. Independent of dialog visibility.
    pub fn select_file(&mut self, file: FileRef) {
        debug!(file_id = %file.id, "file selected");
        self.selected_file = Some(file);
    }

    pub fn clear_selected_file(&mut self) {
        self.selected_file = None;
    }

    pub fn selected_file(&self) -> Option<&FileRef> {
        self.selected_file.as_ref()
    }

    /// Whether any overlay is currently visible.
    pub fn any_open(&self) -> bool {
        self.item.is_open || self.confirm.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn file(id: &str) -> FileRef {
        FileRef {
            id: id.to_string(),
            name: format!("{}.csv", id),
            url: None,
            size: None,
            uploaded_at: None,
        }
    }

    fn assert_item_idle(dc: &DialogCoordinator) {
        let state = dc.item_dialog();
        assert!(!state.is_open);
        assert_eq!(state.request.kind, EntityKind::Chat);
        assert_eq!(state.request.mode, DialogMode::Create);
        assert_eq!(state.request.initial_value, "");
        assert!(state.request.item_id.is_none());
        assert!(state.request.selected_file.is_none());
        assert!(state.request.content_url.is_none());
        assert!(!state.request.has_edit_callback());
        assert!(!state.request.has_file_select_callback());
    }

    #[test]
    fn test_new_coordinator_is_idle() {
        let dc = DialogCoordinator::new();
        assert_item_idle(&dc);
        assert!(!dc.confirm_dialog().is_open);
        assert_eq!(dc.confirm_dialog().request.message, "");
        assert!(dc.selected_file().is_none());
        assert!(!dc.any_open());
    }

    #[test]
    fn test_open_file_preview_then_close() {
        let mut dc = DialogCoordinator::new();
        dc.open_item_dialog(
            ItemDialogRequest::new(EntityKind::File, DialogMode::Preview).with_item_id("f1"),
        );

        let state = dc.item_dialog();
        assert!(state.is_open);
        assert_eq!(state.request.kind, EntityKind::File);
        assert_eq!(state.request.mode, DialogMode::Preview);
        assert_eq!(state.request.item_id.as_deref(), Some("f1"));

        dc.close_item_dialog();
        assert_item_idle(&dc);
    }

    #[test]
    fn test_reopen_replaces_without_merging() {
        let mut dc = DialogCoordinator::new();
        dc.open_item_dialog(
            ItemDialogRequest::new(EntityKind::File, DialogMode::Edit)
                .with_initial_value("report.csv")
                .with_item_id("f9")
                .with_content_url("https://files.example/f9")
                .with_selected_file(file("f9"))
                .on_edit(|_| {}),
        );
        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::Chat, DialogMode::Select));

        let state = dc.item_dialog();
        assert!(state.is_open);
        assert_eq!(state.request.kind, EntityKind::Chat);
        assert_eq!(state.request.mode, DialogMode::Select);
        assert_eq!(state.request.initial_value, "");
        assert!(state.request.item_id.is_none());
        assert!(state.request.content_url.is_none());
        assert!(state.request.selected_file.is_none());
        assert!(!state.request.has_edit_callback());
    }

    #[test]
    fn test_reopen_discards_previous_callbacks_uncalled() {
        let called = Rc::new(Cell::new(false));
        let mut dc = DialogCoordinator::new();

        let flag = called.clone();
        let flag2 = called.clone();
        dc.open_item_dialog(
            ItemDialogRequest::new(EntityKind::Chat, DialogMode::Edit)
                .on_edit(move |_| flag.set(true))
                .on_file_select(move |_| flag2.set(true)),
        );
        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::File, DialogMode::Create));
        dc.close_item_dialog();

        assert!(!called.get());
        // The replaced closures were dropped, so only our handle remains.
        assert_eq!(Rc::strong_count(&called), 1);
    }

    #[test]
    fn test_close_item_dialog_is_idempotent() {
        let mut dc = DialogCoordinator::new();
        dc.close_item_dialog();
        assert_item_idle(&dc);

        dc.open_item_dialog(
            ItemDialogRequest::new(EntityKind::File, DialogMode::Select).with_initial_value("x"),
        );
        dc.close_item_dialog();
        dc.close_item_dialog();
        assert_item_idle(&dc);
    }

    #[test]
    fn test_callbacks_are_taken_once() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let mut dc = DialogCoordinator::new();

        let sink = received.clone();
        dc.open_item_dialog(
            ItemDialogRequest::new(EntityKind::Chat, DialogMode::Create)
                .on_edit(move |name| sink.borrow_mut().push(name)),
        );

        let callback = dc.take_edit_callback().expect("callback stored");
        assert!(dc.take_edit_callback().is_none());
        callback("Harvest planning".to_string());
        dc.close_item_dialog();

        assert_eq!(*received.borrow(), vec!["Harvest planning".to_string()]);
    }

    #[test]
    fn test_file_select_callback_receives_file() {
        let picked = Rc::new(RefCell::new(None));
        let mut dc = DialogCoordinator::new();

        let sink = picked.clone();
        dc.open_item_dialog(
            ItemDialogRequest::new(EntityKind::File, DialogMode::Select)
                .on_file_select(move |f| *sink.borrow_mut() = Some(f)),
        );
        if let Some(cb) = dc.take_file_select_callback() {
            cb(file("soil"));
        }
        dc.close_item_dialog();

        assert_eq!(picked.borrow().as_ref().map(|f| f.id.clone()), Some("soil".to_string()));
    }

    #[test]
    fn test_confirm_dialog_scenario() {
        let count = Rc::new(Cell::new(0));
        let mut dc = DialogCoordinator::new();

        let c = count.clone();
        dc.open_confirm_dialog("Delete this item?", move || c.set(c.get() + 1));
        assert!(dc.confirm_dialog().is_open);
        assert_eq!(dc.confirm_dialog().request.message, "Delete this item?");

        if let Some(cb) = dc.take_confirm_callback() {
            cb();
        }
        dc.close_confirm_dialog();

        assert_eq!(count.get(), 1);
        assert!(!dc.confirm_dialog().is_open);
        assert_eq!(dc.confirm_dialog().request.message, "");
        assert!(!dc.confirm_dialog().request.has_confirm_callback());
    }

    #[test]
    fn test_confirm_replace_does_not_invoke_previous() {
        let first = Rc::new(Cell::new(false));
        let mut dc = DialogCoordinator::new();

        let f = first.clone();
        dc.open_confirm_dialog("Delete chat?", move || f.set(true));
        dc.open_confirm_dialog("Delete file?", || {});

        assert_eq!(dc.confirm_dialog().request.message, "Delete file?");
        assert!(!first.get());
        assert_eq!(Rc::strong_count(&first), 1);

        dc.close_confirm_dialog();
        dc.close_confirm_dialog();
        assert!(!dc.confirm_dialog().is_open);
    }

    #[test]
    fn test_dialogs_are_independent() {
        let mut dc = DialogCoordinator::new();

        dc.open_confirm_dialog("Sure?", || {});
        assert!(!dc.item_dialog().is_open);

        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::Chat, DialogMode::Edit));
        dc.close_confirm_dialog();
        assert!(dc.item_dialog().is_open);

        dc.open_confirm_dialog("Sure?", || {});
        dc.close_item_dialog();
        assert!(dc.confirm_dialog().is_open);
    }

    #[test]
    fn test_both_dialogs_may_be_open_at_once() {
        // Visibility flags are not mutually exclusive.
        let mut dc = DialogCoordinator::new();
        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::File, DialogMode::Edit));
        dc.open_confirm_dialog("Discard changes?", || {});

        assert!(dc.item_dialog().is_open);
        assert!(dc.confirm_dialog().is_open);
        assert!(dc.any_open());
    }

    #[test]
    fn test_file_selection_independent_of_dialogs() {
        let mut dc = DialogCoordinator::new();
        dc.select_file(file("f1"));
        assert_eq!(dc.selected_file().map(|f| f.id.as_str()), Some("f1"));

        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::File, DialogMode::Preview));
        dc.close_item_dialog();
        assert_eq!(dc.selected_file().map(|f| f.id.as_str()), Some("f1"));

        dc.clear_selected_file();
        assert!(dc.selected_file().is_none());
        assert_item_idle(&dc);
    }

    #[test]
    fn test_generation_bumps_on_every_open() {
        let mut dc = DialogCoordinator::new();
        let start = dc.item_generation();
        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::Chat, DialogMode::Create));
        dc.open_item_dialog(ItemDialogRequest::new(EntityKind::Chat, DialogMode::Create));
        assert_eq!(dc.item_generation(), start + 2);
        dc.close_item_dialog();
        assert_eq!(dc.item_generation(), start + 2);
    }
}
