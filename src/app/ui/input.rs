//! Message composer with history and slash commands

use eframe::egui;

use crate::app::AgriApp;
use crate::commands::{self, ChatCommand};
use crate::protocol::BackendAction;
use crate::validation;

impl AgriApp {
    /// Render the composer at the bottom of the chat page
    pub(in crate::app) fn render_input_panel(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();
        let mut enter_pressed = false;

        egui::TopBottomPanel::bottom("input_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme.surface[1])
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .stroke(egui::Stroke::new(1.0, theme.border_medium)),
            )
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme.surface[3])
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        let response = ui.add(
                            egui::TextEdit::multiline(&mut self.input.message_input)
                                .id_salt("composer")
                                .desired_rows(1)
                                .desired_width(ui.available_width() - 4.0)
                                .frame(false)
                                .hint_text("Ask about your crops… (Enter to send, /help)"),
                        );

                        // Shift+Enter inserts a newline
                        enter_pressed = response.has_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

                        if response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::ArrowUp))
                        {
                            self.input.history_up();
                        }
                        if response.has_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::ArrowDown))
                        {
                            self.input.history_down();
                        }
                    });
            });

        if enter_pressed {
            // The multiline edit already inserted the newline
            let trimmed = self.input.message_input.trim_end_matches('\n').to_string();
            self.input.message_input = trimmed;
            self.submit_input();
        }
    }

    /// Send the composer text, or run it when it is a slash command.
    pub fn submit_input(&mut self) {
        if self.input.message_input.trim().is_empty() {
            return;
        }
        let text = self.input.take_message();

        match commands::parse_command(&text) {
            Some(Ok(command)) => self.run_command(command),
            Some(Err(usage)) => self.state.push_status(usage),
            None => {
                let Some(chat_id) = self.state.active_chat.clone() else {
                    self.state.push_status("Open a chat first");
                    return;
                };
                if let Err(e) = validation::validate_message(&text) {
                    self.state.push_status(e);
                    return;
                }
                let text = validation::sanitize_message(&text);
                self.send_backend(BackendAction::SendMessage { chat_id, text });
            }
        }
    }

    fn run_command(&mut self, command: ChatCommand) {
        let active = self.state.active_chat.clone();
        match command {
            ChatCommand::New(None) => self.open_new_chat_dialog(),
            ChatCommand::New(Some(title)) => match validation::validate_chat_title(&title) {
                Ok(()) => self.send_backend(BackendAction::CreateChat { title }),
                Err(e) => self.state.push_status(e),
            },
            ChatCommand::Rename(title) => {
                let Some(id) = active else {
                    self.state.push_status("No active chat to rename");
                    return;
                };
                match title {
                    None => self.open_rename_chat_dialog(&id),
                    Some(title) => match validation::validate_chat_title(&title) {
                        Ok(()) => self.send_backend(BackendAction::RenameChat { id, title }),
                        Err(e) => self.state.push_status(e),
                    },
                }
            }
            ChatCommand::Delete => match active {
                Some(id) => self.request_delete_chat(&id),
                None => self.state.push_status("No active chat to delete"),
            },
            ChatCommand::Analyze(text) => {
                let Some(chat_id) = active else {
                    self.state.push_status("Open a chat first");
                    return;
                };
                let text = text.or_else(|| {
                    self.state
                        .threads
                        .get(&chat_id)
                        .and_then(|t| t.messages.last())
                        .map(|m| m.text.clone())
                });
                match text {
                    Some(text) => {
                        self.send_backend(BackendAction::AnalyzeMessage { chat_id, text })
                    }
                    None => self.state.push_status("Nothing to analyze yet"),
                }
            }
            ChatCommand::Upload => self.open_upload_dialog(),
            ChatCommand::Help => {
                self.state.push_status(commands::HELP_TEXT);
                self.help_dialog.show();
            }
        }
    }
}
