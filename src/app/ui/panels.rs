//! Top bar, side navigation and the central page panels

use eframe::egui;

use crate::app::AgriApp;
use crate::protocol::{BackendAction, Profile};
use crate::state::Page;
use crate::ui;
use crate::ui::panels::{ChatListAction, FileListAction};

/// Editable copy of the profile shown on the Profile page.
#[derive(Default, Debug)]
pub struct ProfileForm {
    pub name: String,
    pub farm_name: String,
    /// Set once the inputs have been filled from a fetched profile
    pub seeded: bool,
    pub error: Option<String>,
}

impl ProfileForm {
    pub fn seed(&mut self, profile: &Profile) {
        self.name = profile.name.clone();
        self.farm_name = profile.farm_name.clone().unwrap_or_default();
        self.seeded = true;
        self.error = None;
    }

    pub fn submit(&self) -> Result<BackendAction, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        let farm = self.farm_name.trim();
        Ok(BackendAction::UpdateProfile {
            name: name.to_string(),
            farm_name: (!farm.is_empty()).then(|| farm.to_string()),
        })
    }
}

impl AgriApp {
    /// Render the top bar (account, theme switch, help, logout)
    pub(in crate::app) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();

        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("AgriTech").strong().color(theme.accent));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Log out").clicked() {
                            self.request_logout();
                        }
                        if ui.button("?").on_hover_text("Keyboard shortcuts (F1)").clicked() {
                            self.help_dialog.toggle();
                        }
                        let (label, next) = if self.settings.theme == "light" {
                            ("Dark", "dark")
                        } else {
                            ("Light", "light")
                        };
                        if ui.button(label).on_hover_text("Switch theme").clicked() {
                            self.set_theme(ctx, next);
                        }
                        if let Some(session) = &self.state.session {
                            ui.label(
                                egui::RichText::new(&session.email).color(theme.text_secondary),
                            );
                        }
                    });
                });
            });
    }

    /// Render the left navigation: pages, and the chat list on the Chat page
    pub(in crate::app) fn render_side_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();

        egui::SidePanel::left("navigation")
            .resizable(true)
            .default_width(220.0)
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(8, 10)),
            )
            .show(ctx, |ui| {
                if let Some(page) = ui::panels::render_page_nav(ui, self.state.page, &theme) {
                    self.state.page = page;
                }

                if self.state.page != Page::Chat {
                    return;
                }
                ui.separator();

                let action = ui::panels::render_chat_list(
                    ui,
                    &theme,
                    &self.state.chats,
                    &self.state.threads,
                    self.state.active_chat.as_deref(),
                );
                match action {
                    Some(ChatListAction::New) => self.open_new_chat_dialog(),
                    Some(ChatListAction::Browse) => self.open_chat_picker(),
                    Some(ChatListAction::Open(id)) => self.open_chat(&id),
                    Some(ChatListAction::Rename(id)) => self.open_rename_chat_dialog(&id),
                    Some(ChatListAction::Preview(id)) => self.open_chat_details(&id),
                    Some(ChatListAction::Delete(id)) => self.request_delete_chat(&id),
                    None => {}
                }
            });
    }

    /// Render the central panel for the active page
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        if self.state.page == Page::Chat && self.state.active_chat.is_some() {
            self.render_input_panel(ctx);
        }

        let theme = self.theme.clone();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]).inner_margin(12.0))
            .show(ctx, |ui| match self.state.page {
                Page::Chat => self.render_chat_page(ui),
                Page::Files => self.render_files_page(ui),
                Page::Profile => self.render_profile_page(ui),
                Page::Telemetry => self.render_telemetry_page(ui),
            });
    }

    fn render_chat_page(&mut self, ui: &mut egui::Ui) {
        let Some(chat_id) = self.state.active_chat.clone() else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.weak("Pick a chat on the left or start a new one.");
                if ui.button("New chat").clicked() {
                    self.open_new_chat_dialog();
                }
            });
            return;
        };

        let title = self.state.chat_title(&chat_id).unwrap_or_default().to_string();
        ui.horizontal(|ui| {
            ui.heading(&title);
            if ui.small_button("Rename").clicked() {
                self.open_rename_chat_dialog(&chat_id);
            }
        });
        ui.separator();

        let thread = self.state.ensure_thread(&chat_id);
        if let Some(text) = ui::messages::render_messages(ui, &self.theme, thread) {
            self.send_backend(BackendAction::AnalyzeMessage { chat_id, text });
        }
    }

    fn render_files_page(&mut self, ui: &mut egui::Ui) {
        let action = ui::panels::render_file_list(
            ui,
            &self.theme,
            &self.state.files,
            self.dialogs.selected_file(),
        );
        match action {
            Some(FileListAction::Upload) => self.open_upload_dialog(),
            Some(FileListAction::Choose) => self.open_file_picker(),
            Some(FileListAction::Select(id)) => {
                if let Some(file) = self.state.file(&id).cloned() {
                    self.dialogs.select_file(file);
                }
            }
            Some(FileListAction::Preview(id)) => self.open_file_preview(&id),
            Some(FileListAction::Rename(id)) => self.open_rename_file_dialog(&id),
            Some(FileListAction::Delete(id)) => self.request_delete_file(&id),
            None => {}
        }
    }

    fn render_profile_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Profile");
        ui.separator();

        let Some(profile) = self.state.profile.clone() else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading profile…");
            });
            return;
        };
        if !self.profile_form.seeded {
            self.profile_form.seed(&profile);
        }

        egui::Grid::new("profile_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Email:");
                ui.label(&profile.email);
                ui.end_row();

                ui.label("Name:");
                ui.text_edit_singleline(&mut self.profile_form.name);
                ui.end_row();

                ui.label("Farm:");
                ui.text_edit_singleline(&mut self.profile_form.farm_name);
                ui.end_row();

                if let Some(created) = &profile.created_at {
                    ui.label("Member since:");
                    ui.label(created);
                    ui.end_row();
                }
            });

        if let Some(err) = &self.profile_form.error {
            ui.colored_label(self.theme.error, err);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                match self.profile_form.submit() {
                    Ok(action) => {
                        self.profile_form.error = None;
                        self.send_backend(action);
                    }
                    Err(e) => self.profile_form.error = Some(e),
                }
            }
            if ui.button("Revert").clicked() {
                self.profile_form.seed(&profile);
            }
        });
    }

    fn render_telemetry_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("Telemetry");
        ui.separator();
        ui.weak("Field sensors are not connected yet.");
        ui.add_space(12.0);

        ui.label(egui::RichText::new("Activity").strong());
        egui::ScrollArea::vertical()
            .id_salt("activity_log")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &self.state.activity_log {
                    ui.label(
                        egui::RichText::new(line)
                            .monospace()
                            .color(self.theme.text_secondary),
                    );
                }
            });
    }
}
