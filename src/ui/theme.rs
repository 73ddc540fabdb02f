//! Color themes and styling for the AgriTech client.
//!
//! # Surface hierarchy
//!
//! - `surface[0]`: App background (deepest layer)
//! - `surface[1]`: Side navigation and top bar
//! - `surface[2]`: Central page background
//! - `surface[3]`: Hover states
//! - `surface[4]`: Active/selected states
//! - `surface[5]`: Elevated panels (toasts)
//! - `surface[6]`: Dialogs
//!
//! Semantic colors (`accent`, `success`, `warning`, `error`, `info`) are used
//! instead of ad-hoc colors so both themes stay consistent.

use eframe::egui::{Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use crate::protocol::Author;

#[derive(Clone, Debug)]
pub struct AgriTheme {
    pub name: String,
    pub surface: [Color32; 7],
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_medium: Color32,
}

impl AgriTheme {
    /// Dark theme with a field-green accent
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(12, 14, 12),
                Color32::from_rgb(20, 24, 20),
                Color32::from_rgb(28, 33, 28),
                Color32::from_rgb(38, 45, 38),
                Color32::from_rgb(48, 58, 48),
                Color32::from_rgb(58, 68, 58),
                Color32::from_rgb(68, 80, 68),
            ],
            accent: Color32::from_rgb(76, 175, 80),
            success: Color32::from_rgb(129, 199, 132),
            warning: Color32::from_rgb(250, 166, 26),
            error: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(0, 175, 244),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(190, 196, 188),
            text_muted: Color32::from_rgb(120, 128, 118),
            border_medium: Color32::from_rgb(50, 56, 50),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(245, 247, 243),
                Color32::from_rgb(240, 243, 238),
                Color32::from_rgb(226, 232, 222),
                Color32::from_rgb(210, 220, 205),
                Color32::from_rgb(196, 206, 190),
                Color32::from_rgb(182, 194, 176),
            ],
            accent: Color32::from_rgb(46, 125, 50),
            success: Color32::from_rgb(46, 125, 50),
            warning: Color32::from_rgb(230, 126, 34),
            error: Color32::from_rgb(198, 40, 40),
            info: Color32::from_rgb(2, 119, 189),
            text_primary: Color32::from_rgb(10, 12, 10),
            text_secondary: Color32::from_rgb(70, 80, 70),
            text_muted: Color32::from_rgb(120, 130, 118),
            border_medium: Color32::from_rgb(208, 214, 204),
        }
    }

    /// Pick a theme by its settings name; anything unknown is dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Label color for a message author.
    pub fn author_color(&self, author: Author) -> Color32 {
        match author {
            Author::User => self.accent,
            Author::Assistant => self.info,
            Author::System => self.text_muted,
        }
    }
}

/// Text hierarchy: 14px body, 16px headings, custom chat styles.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("chat_message".into()), FontId::new(14.0, Proportional)),
        (TextStyle::Name("chat_meta".into()), FontId::new(11.0, Proportional)),
        (TextStyle::Name("section_header".into()), FontId::new(11.0, Proportional)),
    ]
    .into()
}

/// Apply text styles, spacing and widget rounding to the egui context.
pub fn apply_app_style(ctx: &eframe::egui::Context, theme: &AgriTheme) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = eframe::egui::vec2(8.0, 6.0);
    style.spacing.window_margin = eframe::egui::Margin::same(12);
    style.spacing.button_padding = eframe::egui::vec2(10.0, 5.0);

    let rounding = eframe::egui::CornerRadius::same(6);
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;
    style.visuals.widgets.hovered.bg_fill = theme.surface[3];
    style.visuals.widgets.active.bg_fill = theme.accent;
    style.visuals.widgets.active.weak_bg_fill = theme.accent;

    style.visuals.window_fill = theme.surface[6];
    style.visuals.panel_fill = theme.surface[2];
    style.visuals.selection.bg_fill = theme.accent.gamma_multiply(0.5);

    ctx.set_style(style);
}
