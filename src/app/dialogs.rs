//! Dialog orchestration: opening dialogs through the coordinator and
//! rendering them once per frame.

use eframe::egui;

use super::{AgriApp, AppCommand};
use crate::dialog_coordinator::{DialogMode, EntityKind, ItemDialogRequest};
use crate::protocol::BackendAction;
use crate::ui;

impl AgriApp {
    /// Render all dialogs, then apply whatever their callbacks queued.
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        ui::dialogs::render_status_toasts(ctx, &self.theme, &self.state.status_messages);
        self.help_dialog.render(ctx);

        self.item_dialog_view.render(
            ctx,
            &mut self.dialogs,
            &self.state.chats,
            &self.state.files,
        );
        ui::dialogs::render_confirm_dialog(ctx, &mut self.dialogs);

        self.drain_commands();
    }

    pub fn open_new_chat_dialog(&mut self) {
        let tx = self.command_tx.clone();
        self.dialogs.open_item_dialog(
            ItemDialogRequest::new(EntityKind::Chat, DialogMode::Create).on_edit(move |title| {
                let _ = tx.send(AppCommand::Backend(BackendAction::CreateChat { title }));
            }),
        );
    }

    pub fn open_rename_chat_dialog(&mut self, chat_id: &str) {
        let Some(title) = self.state.chat_title(chat_id).map(str::to_string) else {
            return;
        };
        let tx = self.command_tx.clone();
        let id = chat_id.to_string();
        self.dialogs.open_item_dialog(
            ItemDialogRequest::new(EntityKind::Chat, DialogMode::Edit)
                .with_initial_value(title)
                .with_item_id(chat_id)
                .on_edit(move |title| {
                    let _ = tx.send(AppCommand::Backend(BackendAction::RenameChat { id, title }));
                }),
        );
    }

    pub fn open_chat_picker(&mut self) {
        let tx = self.command_tx.clone();
        self.dialogs.open_item_dialog(
            ItemDialogRequest::new(EntityKind::Chat, DialogMode::Select).on_edit(move |chat_id| {
                let _ = tx.send(AppCommand::OpenChat(chat_id));
            }),
        );
    }

    pub fn open_chat_details(&mut self, chat_id: &str) {
        let title = self.state.chat_title(chat_id).unwrap_or_default().to_string();
        self.dialogs.open_item_dialog(
            ItemDialogRequest::new(EntityKind::Chat, DialogMode::Preview)
                .with_initial_value(title)
                .with_item_id(chat_id),
        );
    }

    pub fn request_delete_chat(&mut self, chat_id: &str) {
        let title = self.state.chat_title(chat_id).unwrap_or(chat_id).to_string();
        let tx = self.command_tx.clone();
        let id = chat_id.to_string();
        self.dialogs.open_confirm_dialog(
            format!("Delete chat \"{}\"? Its messages will be lost.", title),
            move || {
                let _ = tx.send(AppCommand::Backend(BackendAction::DeleteChat(id)));
            },
        );
    }

    pub fn open_upload_dialog(&mut self) {
        let tx = self.command_tx.clone();
        self.dialogs.open_item_dialog(
            ItemDialogRequest::new(EntityKind::File, DialogMode::Create).on_edit(move |path| {
                let _ = tx.send(AppCommand::Backend(BackendAction::UploadFile { path }));
            }),
        );
    }

    pub fn open_file_picker(&mut self) {
        let tx = self.command_tx.clone();
        let mut request = ItemDialogRequest::new(EntityKind::File, DialogMode::Select)
            .on_file_select(move |file| {
                let _ = tx.send(AppCommand::SelectFile(file));
            });
        if let Some(current) = self.dialogs.selected_file() {
            request = request.with_selected_file(current.clone());
        }
        self.dialogs.open_item_dialog(request);
    }

    pub fn open_file_preview(&mut self, file_id: &str) {
        let Some(file) = self.state.file(file_id).cloned() else {
            return;
        };
        let mut request = ItemDialogRequest::new(EntityKind::File, DialogMode::Preview)
            .with_item_id(file_id)
            .with_initial_value(file.name.clone());
        if let Some(url) = &file.url {
            request = request.with_content_url(url.clone());
        }
        self.dialogs.open_item_dialog(request.with_selected_file(file));
    }

    pub fn open_rename_file_dialog(&mut self, file_id: &str) {
        let Some(name) = self.state.file(file_id).map(|f| f.name.clone()) else {
            return;
        };
        let tx = self.command_tx.clone();
        let id = file_id.to_string();
        self.dialogs.open_item_dialog(
            ItemDialogRequest::new(EntityKind::File, DialogMode::Edit)
                .with_initial_value(name)
                .with_item_id(file_id)
                .on_edit(move |name| {
                    let _ = tx.send(AppCommand::Backend(BackendAction::RenameFile { id, name }));
                }),
        );
    }

    pub fn request_delete_file(&mut self, file_id: &str) {
        let name = self
            .state
            .file(file_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| file_id.to_string());
        let tx = self.command_tx.clone();
        let id = file_id.to_string();
        self.dialogs
            .open_confirm_dialog(format!("Delete {}? This cannot be undone.", name), move || {
                let _ = tx.send(AppCommand::Backend(BackendAction::DeleteFile(id)));
            });
    }

    /// Confirm a logout; the session token is dropped by the backend.
    pub fn request_logout(&mut self) {
        let tx = self.command_tx.clone();
        self.dialogs.open_confirm_dialog("Log out of AgriTech?", move || {
            let _ = tx.send(AppCommand::Backend(BackendAction::Logout));
        });
    }
}
