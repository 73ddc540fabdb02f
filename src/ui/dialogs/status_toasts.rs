//! Status toast notifications - floating messages in top-right corner.

use eframe::egui;

use crate::ui::theme::AgriTheme;

/// Render floating status toasts (top-right corner).
pub fn render_status_toasts(
    ctx: &egui::Context,
    theme: &AgriTheme,
    status_messages: &[(String, std::time::Instant)],
) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0]) // Below top bar
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.surface[5])
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for (msg, _) in status_messages {
                        let color = if msg.starts_with("Error") {
                            theme.error
                        } else {
                            theme.success
                        };
                        ui.label(egui::RichText::new(msg).color(color));
                    }
                });
        });
}
