//! Item dialog - the create/select/preview/edit overlay for chats and files.
//!
//! The view owns only transient form input. Everything about *which* dialog
//! is open lives in the `DialogCoordinator`; the view re-seeds its input
//! whenever the coordinator reports a new open generation.

use eframe::egui;

use crate::dialog_coordinator::{DialogCoordinator, DialogMode, EntityKind};
use crate::protocol::{ChatSummary, FileRef};
use crate::validation;

/// Window title for a (kind, mode) pair.
pub fn dialog_title(kind: EntityKind, mode: DialogMode) -> &'static str {
    match (kind, mode) {
        (EntityKind::Chat, DialogMode::Create) => "New Chat",
        (EntityKind::Chat, DialogMode::Select) => "Open Chat",
        (EntityKind::Chat, DialogMode::Preview) => "Chat Details",
        (EntityKind::Chat, DialogMode::Edit) => "Rename Chat",
        (EntityKind::File, DialogMode::Create) => "Upload File",
        (EntityKind::File, DialogMode::Select) => "Choose File",
        (EntityKind::File, DialogMode::Preview) => "File Preview",
        (EntityKind::File, DialogMode::Edit) => "Rename File",
    }
}

/// Validate the text a user entered for the open dialog.
fn validate_input(kind: EntityKind, mode: DialogMode, value: &str) -> Result<(), String> {
    match (kind, mode) {
        (EntityKind::Chat, DialogMode::Create | DialogMode::Edit) => {
            validation::validate_chat_title(value)
        }
        (EntityKind::File, DialogMode::Create) => validation::validate_upload_path(value),
        (EntityKind::File, DialogMode::Edit) => validation::validate_file_name(value),
        (_, DialogMode::Select) if value.trim().is_empty() => {
            Err("Nothing selected".to_string())
        }
        (_, DialogMode::Select) => Ok(()),
        (_, DialogMode::Preview) => Err("Preview dialogs have nothing to submit".to_string()),
    }
}

/// Validate `value`, hand it to the edit callback, then close the dialog.
///
/// On a validation error the dialog stays open with its callback intact.
pub fn submit_edit(coordinator: &mut DialogCoordinator, value: &str) -> Result<(), String> {
    let request = &coordinator.item_dialog().request;
    validate_input(request.kind, request.mode, value)?;

    if let Some(callback) = coordinator.take_edit_callback() {
        callback(value.trim().to_string());
    }
    coordinator.close_item_dialog();
    Ok(())
}

/// Hand the picked file to the file-select callback, then close the dialog.
pub fn submit_file_select(coordinator: &mut DialogCoordinator, file: FileRef) {
    if let Some(callback) = coordinator.take_file_select_callback() {
        callback(file);
    }
    coordinator.close_item_dialog();
}

/// Transient input state for the item dialog window.
#[derive(Default)]
pub struct ItemDialogView {
    /// Generation the input was seeded for
    seeded_for: u64,
    pub input: String,
    pub filter: String,
    pub error: Option<String>,
}

impl ItemDialogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seed the form if the coordinator opened a new dialog since the
    /// last frame. Returns true when it did.
    pub fn sync(&mut self, coordinator: &DialogCoordinator) -> bool {
        let generation = coordinator.item_generation();
        if self.seeded_for == generation {
            return false;
        }
        self.seeded_for = generation;
        self.input = coordinator.item_dialog().request.initial_value.clone();
        self.filter.clear();
        self.error = None;
        true
    }

    fn submit(&mut self, coordinator: &mut DialogCoordinator) {
        let value = self.input.clone();
        if let Err(e) = submit_edit(coordinator, &value) {
            self.error = Some(e);
        }
    }

    /// Render the item dialog if the coordinator says it is open.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        coordinator: &mut DialogCoordinator,
        chats: &[ChatSummary],
        files: &[FileRef],
    ) {
        if !coordinator.item_dialog().is_open {
            return;
        }
        // Keys pressed in the frame that opened the dialog belong to
        // whatever opened it (e.g. Enter in the composer)
        let just_opened = self.sync(coordinator);
        // A confirm window on top takes the keyboard
        let keys_active = !just_opened && !coordinator.confirm_dialog().is_open;

        let kind = coordinator.item_dialog().request.kind;
        let mode = coordinator.item_dialog().request.mode;

        let mut window_open = true;
        let mut should_close = false;
        let mut submit = false;
        let mut picked_chat: Option<String> = None;
        let mut picked_file: Option<FileRef> = None;

        egui::Window::new(dialog_title(kind, mode))
            .id(egui::Id::new("item_dialog"))
            .open(&mut window_open)
            .collapsible(false)
            .resizable(matches!(mode, DialogMode::Select | DialogMode::Preview))
            .default_width(380.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match (kind, mode) {
                    (EntityKind::Chat, DialogMode::Create | DialogMode::Edit) => {
                        ui.label("Chat title:");
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.input)
                                .hint_text("e.g. Spring irrigation plan")
                                .desired_width(f32::INFINITY),
                        );
                        response.request_focus();
                    }
                    (EntityKind::File, DialogMode::Create) => {
                        ui.label("Path of the file to upload:");
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.input)
                                .hint_text("/home/me/yield-2026.csv")
                                .desired_width(f32::INFINITY),
                        );
                        response.request_focus();
                    }
                    (EntityKind::File, DialogMode::Edit) => {
                        ui.label("File name:");
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.input)
                                .desired_width(f32::INFINITY),
                        );
                        response.request_focus();
                    }
                    (EntityKind::Chat, DialogMode::Select) => {
                        ui.add(egui::TextEdit::singleline(&mut self.filter).hint_text("Filter"));
                        ui.separator();
                        egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                            let needle = self.filter.to_lowercase();
                            for chat in chats
                                .iter()
                                .filter(|c| c.title.to_lowercase().contains(&needle))
                            {
                                if ui.selectable_label(false, &chat.title).clicked() {
                                    picked_chat = Some(chat.id.clone());
                                }
                            }
                            if chats.is_empty() {
                                ui.weak("No chats yet");
                            }
                        });
                    }
                    (EntityKind::File, DialogMode::Select) => {
                        ui.add(egui::TextEdit::singleline(&mut self.filter).hint_text("Filter"));
                        ui.separator();
                        egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                            let needle = self.filter.to_lowercase();
                            for file in files
                                .iter()
                                .filter(|f| f.name.to_lowercase().contains(&needle))
                            {
                                if ui.selectable_label(false, &file.name).clicked() {
                                    picked_file = Some(file.clone());
                                }
                            }
                            if files.is_empty() {
                                ui.weak("No files uploaded yet");
                            }
                        });
                    }
                    (EntityKind::Chat, DialogMode::Preview) => {
                        let request = &coordinator.item_dialog().request;
                        let id = request.item_id.as_deref().unwrap_or("-");
                        let title = chats
                            .iter()
                            .find(|c| c.id == id)
                            .map(|c| c.title.as_str())
                            .unwrap_or(request.initial_value.as_str());
                        egui::Grid::new("chat_preview").num_columns(2).show(ui, |ui| {
                            ui.label("Title");
                            ui.label(title);
                            ui.end_row();
                            ui.label("Id");
                            ui.monospace(id);
                            ui.end_row();
                        });
                    }
                    (EntityKind::File, DialogMode::Preview) => {
                        let request = &coordinator.item_dialog().request;
                        let file = request.selected_file.as_ref().or_else(|| {
                            request
                                .item_id
                                .as_deref()
                                .and_then(|id| files.iter().find(|f| f.id == id))
                        });
                        egui::Grid::new("file_preview").num_columns(2).show(ui, |ui| {
                            ui.label("Name");
                            ui.label(file.map(|f| f.name.as_str()).unwrap_or("-"));
                            ui.end_row();
                            ui.label("Size");
                            ui.label(
                                file.and_then(|f| f.size)
                                    .map(format_size)
                                    .unwrap_or_else(|| "-".into()),
                            );
                            ui.end_row();
                            ui.label("Uploaded");
                            ui.label(
                                file.and_then(|f| f.uploaded_at.as_deref()).unwrap_or("-"),
                            );
                            ui.end_row();
                        });
                        let url = request
                            .content_url
                            .as_deref()
                            .or_else(|| file.and_then(|f| f.url.as_deref()));
                        if let Some(url) = url {
                            ui.add_space(6.0);
                            ui.hyperlink_to("Open content", url);
                        }
                    }
                }

                if let Some(err) = &self.error {
                    ui.add_space(4.0);
                    ui.colored_label(egui::Color32::from_rgb(240, 71, 71), err);
                }

                ui.add_space(8.0);
                let can_submit = !self.input.trim().is_empty()
                    && (mode != DialogMode::Edit
                        || self.input.trim() != coordinator.item_dialog().request.initial_value);

                ui.horizontal(|ui| {
                    let label = match (kind, mode) {
                        (_, DialogMode::Preview | DialogMode::Select) => None,
                        (EntityKind::Chat, DialogMode::Create) => Some("Create"),
                        (EntityKind::File, DialogMode::Create) => Some("Upload"),
                        (_, DialogMode::Edit) => Some("Rename"),
                    };
                    if let Some(label) = label {
                        if ui.add_enabled(can_submit, egui::Button::new(label)).clicked() {
                            submit = true;
                        }
                    }
                    let close_label = if mode == DialogMode::Preview { "Close" } else { "Cancel" };
                    if ui.button(close_label).clicked() {
                        should_close = true;
                    }
                });

                // Also submit on Enter key
                if keys_active
                    && can_submit
                    && matches!(mode, DialogMode::Create | DialogMode::Edit)
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submit = true;
                }

                // Close on Escape
                if keys_active && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        if let Some(chat_id) = picked_chat {
            self.input = chat_id;
            submit = true;
        }

        if let Some(file) = picked_file {
            submit_file_select(coordinator, file);
        } else if submit {
            self.submit(coordinator);
        } else if should_close || !window_open {
            coordinator.close_item_dialog();
        }
    }
}

/// Human-readable byte size.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
