//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::AgriApp;

impl eframe::App for AgriApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events and anything dialog callbacks queued
        self.process_events();
        self.drain_commands();

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        if !self.state.is_logged_in() {
            self.render_auth_screen(ctx);
            self.render_dialogs(ctx);
            return;
        }

        self.handle_shortcuts(ctx);

        self.render_top_bar(ctx);
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);

        self.render_dialogs(ctx);
    }
}

impl AgriApp {
    /// Global keyboard shortcuts (work even when input doesn't have focus)
    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (help, new_chat, upload, open_chat, next, prev) = ctx.input(|i| {
            let ctrl = i.modifiers.ctrl;
            let tab = ctrl && i.key_pressed(egui::Key::Tab);
            (
                i.key_pressed(egui::Key::F1),
                ctrl && i.key_pressed(egui::Key::N),
                ctrl && i.key_pressed(egui::Key::U),
                ctrl && i.key_pressed(egui::Key::O),
                tab && !i.modifiers.shift,
                tab && i.modifiers.shift,
            )
        });
        if help {
            self.help_dialog.toggle();
        }
        // Dialog shortcuts don't stack over an open dialog
        if !self.dialogs.any_open() {
            if new_chat {
                self.open_new_chat_dialog();
            } else if upload {
                self.open_upload_dialog();
            } else if open_chat {
                self.open_chat_picker();
            }
        }
        if next {
            if let Some(id) = self.state.next_chat() {
                self.open_chat(&id);
            }
        } else if prev {
            if let Some(id) = self.state.prev_chat() {
                self.open_chat(&id);
            }
        }
    }
}
