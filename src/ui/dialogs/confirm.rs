//! Confirm dialog - accept/cancel prompt for destructive actions.

use eframe::egui;

use crate::dialog_coordinator::DialogCoordinator;

/// Run the pending confirmation (if any) and close the dialog.
pub fn confirm(coordinator: &mut DialogCoordinator) {
    if let Some(callback) = coordinator.take_confirm_callback() {
        callback();
    }
    coordinator.close_confirm_dialog();
}

/// Render the confirm dialog if the coordinator says it is open.
pub fn render_confirm_dialog(ctx: &egui::Context, coordinator: &mut DialogCoordinator) {
    if !coordinator.confirm_dialog().is_open {
        return;
    }

    let mut window_open = true;
    let mut accepted = false;
    let mut cancelled = false;

    egui::Window::new("Please confirm")
        .id(egui::Id::new("confirm_dialog"))
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.label(&coordinator.confirm_dialog().request.message);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let confirm_btn = egui::Button::new(
                    egui::RichText::new("Confirm").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(240, 71, 71));
                if ui.add(confirm_btn).clicked() {
                    accepted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                cancelled = true;
            }
        });

    if accepted {
        confirm(coordinator);
    } else if cancelled || !window_open {
        coordinator.close_confirm_dialog();
    }
}
