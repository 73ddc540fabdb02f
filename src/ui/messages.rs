//! Message area rendering for the active chat.

use eframe::egui;

use crate::chat::ChatThread;
use crate::protocol::Author;
use crate::ui::theme::AgriTheme;

fn author_label(author: Author) -> &'static str {
    match author {
        Author::User => "You",
        Author::Assistant => "Assistant",
        Author::System => "System",
    }
}

/// Render the messages of one chat, newest at the bottom.
///
/// Returns the text of a message whose "Analyze" button was clicked.
pub fn render_messages(
    ui: &mut egui::Ui,
    theme: &AgriTheme,
    thread: &ChatThread,
) -> Option<String> {
    let mut analyze = None;

    if !thread.loaded {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading messages…");
        });
        return None;
    }

    if let Some(analysis) = &thread.analysis {
        egui::Frame::new()
            .fill(theme.surface[3])
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Analysis").strong().color(theme.info));
                ui.label(analysis);
            });
        ui.add_space(6.0);
    }

    egui::ScrollArea::vertical()
        .id_salt("message_area")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if thread.messages.is_empty() {
                ui.weak("No messages yet. Ask something about your fields!");
            }
            for msg in &thread.messages {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(author_label(msg.author))
                            .strong()
                            .color(theme.author_color(msg.author)),
                    );
                    if let Some(ts) = &msg.created_at {
                        ui.label(
                            egui::RichText::new(ts)
                                .text_style(egui::TextStyle::Name("chat_meta".into()))
                                .color(theme.text_muted),
                        );
                    }
                    if msg.author == Author::User
                        && ui
                            .small_button("Analyze")
                            .on_hover_text("Run analysis on this message")
                            .clicked()
                    {
                        analyze = Some(msg.text.clone());
                    }
                });
                ui.label(
                    egui::RichText::new(&msg.text)
                        .text_style(egui::TextStyle::Name("chat_message".into()))
                        .color(theme.text_primary),
                );
                ui.add_space(6.0);
            }
        });

    analyze
}
