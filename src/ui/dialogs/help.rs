//! Help window (F1) - keyboard shortcuts and page overview.

use eframe::egui;

/// Help window visibility.
#[derive(Default)]
pub struct HelpDialog {
    pub open: bool,
}

impl HelpDialog {
    /// Create a new help dialog (closed by default)
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn show(&mut self) {
        self.open = true;
    }

    /// Render the help dialog.
    /// Returns true if the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }

        let mut still_open = true;
        egui::Window::new("Help")
            .open(&mut still_open)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Shortcuts");
                ui.separator();

                egui::Grid::new("help_shortcuts").num_columns(2).show(ui, |ui| {
                    for (keys, what) in SHORTCUTS {
                        ui.monospace(*keys);
                        ui.label(*what);
                        ui.end_row();
                    }
                });

                ui.separator();
                ui.label("Pages:");
                ui.label("  • Chat: ask questions, run analysis on a message");
                ui.label("  • Files: upload, preview, rename and delete files");
                ui.label("  • Profile: account details");
                ui.label("  • Telemetry: station dashboards (coming soon)");
            });

        if !still_open {
            self.open = false;
        }

        self.open
    }
}

const SHORTCUTS: &[(&str, &str)] = &[
    ("F1", "Toggle this help window"),
    ("Ctrl+N", "New chat"),
    ("Ctrl+U", "Upload a file"),
    ("Ctrl+O", "Open a chat"),
    ("Ctrl+Tab", "Next chat"),
    ("Ctrl+Shift+Tab", "Previous chat"),
    ("Enter", "Send message / submit dialog"),
    ("Esc", "Close the open dialog"),
];
