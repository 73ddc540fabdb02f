//! Side panels: page navigation, chat list and file list.
//!
//! Render functions take the state they display by reference and return an
//! action instead of mutating app state directly.

use std::collections::HashMap;

use eframe::egui;

use crate::chat::ChatThread;
use crate::protocol::{ChatSummary, FileRef};
use crate::state::Page;
use crate::ui::dialogs::format_size;
use crate::ui::theme::AgriTheme;

/// What the user did in the chat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatListAction {
    New,
    /// Open the chat picker
    Browse,
    Open(String),
    Rename(String),
    Preview(String),
    Delete(String),
}

/// What the user did in the file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileListAction {
    Upload,
    /// Open the file picker
    Choose,
    Select(String),
    Preview(String),
    Rename(String),
    Delete(String),
}

fn section_header(ui: &mut egui::Ui, theme: &AgriTheme, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .text_style(egui::TextStyle::Name("section_header".into()))
            .color(theme.text_muted),
    );
}

/// Page selector. Returns the page the user clicked, if it changed.
pub fn render_page_nav(ui: &mut egui::Ui, current: Page, theme: &AgriTheme) -> Option<Page> {
    let mut picked = None;
    section_header(ui, theme, "Pages");
    for page in Page::ALL {
        if ui.selectable_label(current == page, page.label()).clicked() && current != page {
            picked = Some(page);
        }
    }
    picked
}

pub fn render_chat_list(
    ui: &mut egui::Ui,
    theme: &AgriTheme,
    chats: &[ChatSummary],
    threads: &HashMap<String, ChatThread>,
    active_chat: Option<&str>,
) -> Option<ChatListAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        section_header(ui, theme, "Chats");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("+").on_hover_text("New chat (Ctrl+N)").clicked() {
                action = Some(ChatListAction::New);
            }
            if ui.small_button("…").on_hover_text("Find a chat (Ctrl+O)").clicked() {
                action = Some(ChatListAction::Browse);
            }
        });
    });

    egui::ScrollArea::vertical()
        .id_salt("chat_list")
        .show(ui, |ui| {
            for chat in chats {
                let unread = threads.get(&chat.id).map(|t| t.unread_count).unwrap_or(0);
                let label = if unread > 0 {
                    egui::RichText::new(format!("{}  ({})", chat.title, unread)).strong()
                } else {
                    egui::RichText::new(&chat.title)
                };
                let selected = active_chat == Some(chat.id.as_str());
                let response = ui.selectable_label(selected, label);
                if response.clicked() {
                    action = Some(ChatListAction::Open(chat.id.clone()));
                }
                response.context_menu(|ui| {
                    if ui.button("Rename…").clicked() {
                        action = Some(ChatListAction::Rename(chat.id.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Details").clicked() {
                        action = Some(ChatListAction::Preview(chat.id.clone()));
                        ui.close_menu();
                    }
                    if ui.button("Delete").clicked() {
                        action = Some(ChatListAction::Delete(chat.id.clone()));
                        ui.close_menu();
                    }
                });
            }
            if chats.is_empty() {
                ui.weak("No chats yet");
            }
        });

    action
}

pub fn render_file_list(
    ui: &mut egui::Ui,
    theme: &AgriTheme,
    files: &[FileRef],
    selected: Option<&FileRef>,
) -> Option<FileListAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("Files");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Upload…").on_hover_text("Ctrl+U").clicked() {
                action = Some(FileListAction::Upload);
            }
            if ui.button("Choose…").on_hover_text("Pick the working file").clicked() {
                action = Some(FileListAction::Choose);
            }
        });
    });
    if let Some(file) = selected {
        ui.label(
            egui::RichText::new(format!("Selected: {}", file.name)).color(theme.text_secondary),
        );
    }
    ui.separator();

    if files.is_empty() {
        ui.weak("No files uploaded yet");
        return action;
    }

    egui::ScrollArea::vertical()
        .id_salt("file_list")
        .show(ui, |ui| {
            egui::Grid::new("file_grid")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for file in files {
                        let is_selected = selected.map(|f| f.id == file.id).unwrap_or(false);
                        if ui.selectable_label(is_selected, &file.name).clicked() {
                            action = Some(FileListAction::Select(file.id.clone()));
                        }
                        ui.label(
                            egui::RichText::new(
                                file.size.map(format_size).unwrap_or_default(),
                            )
                            .color(theme.text_muted),
                        );
                        ui.label(
                            egui::RichText::new(file.uploaded_at.as_deref().unwrap_or(""))
                                .color(theme.text_muted),
                        );
                        ui.horizontal(|ui| {
                            if ui.small_button("Preview").clicked() {
                                action = Some(FileListAction::Preview(file.id.clone()));
                            }
                            if ui.small_button("Rename").clicked() {
                                action = Some(FileListAction::Rename(file.id.clone()));
                            }
                            if ui
                                .small_button(egui::RichText::new("Delete").color(theme.error))
                                .clicked()
                            {
                                action = Some(FileListAction::Delete(file.id.clone()));
                            }
                        });
                        ui.end_row();
                    }
                });
        });

    action
}
