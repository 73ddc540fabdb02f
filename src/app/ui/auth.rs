//! Login / registration screen shown while no session exists

use eframe::egui;

use crate::app::AgriApp;
use crate::protocol::BackendAction;
use crate::validation;

/// Inputs of the login screen.
#[derive(Default, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Display name, only used when registering
    pub name: String,
    pub register_mode: bool,
    pub error: Option<String>,
}

impl LoginForm {
    /// Form pre-filled with the last address that logged in.
    pub fn with_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Self::default()
        }
    }

    /// Validate the inputs and build the matching backend request.
    pub fn submit(&self) -> Result<BackendAction, String> {
        let email = self.email.trim().to_string();
        validation::validate_email(&email)?;
        validation::validate_password(&self.password)?;

        if self.register_mode {
            let name = self.name.trim().to_string();
            if name.is_empty() {
                return Err("Name cannot be empty".to_string());
            }
            Ok(BackendAction::Register {
                name,
                email,
                password: self.password.clone(),
            })
        } else {
            Ok(BackendAction::Login {
                email,
                password: self.password.clone(),
            })
        }
    }
}

impl AgriApp {
    pub(in crate::app) fn render_auth_screen(&mut self, ctx: &egui::Context) {
        let theme = self.theme.clone();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.surface[0]))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.15);
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new("AgriTech").color(theme.accent).size(28.0));
                    ui.label(
                        egui::RichText::new("Field assistant for your farm")
                            .color(theme.text_secondary),
                    );
                    ui.add_space(16.0);

                    egui::Frame::new()
                        .fill(theme.surface[2])
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(24, 20))
                        .stroke(egui::Stroke::new(1.0, theme.border_medium))
                        .show(ui, |ui| {
                            ui.set_width(320.0);
                            let mut submitted = false;

                            egui::Grid::new("auth_form")
                                .num_columns(2)
                                .spacing([8.0, 8.0])
                                .show(ui, |ui| {
                                    if self.login_form.register_mode {
                                        ui.label("Name:");
                                        ui.text_edit_singleline(&mut self.login_form.name);
                                        ui.end_row();
                                    }
                                    ui.label("Email:");
                                    ui.text_edit_singleline(&mut self.login_form.email);
                                    ui.end_row();

                                    ui.label("Password:");
                                    let pw = ui.add(
                                        egui::TextEdit::singleline(&mut self.login_form.password)
                                            .password(true),
                                    );
                                    if pw.lost_focus()
                                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                    {
                                        submitted = true;
                                    }
                                    ui.end_row();
                                });

                            if let Some(err) = &self.login_form.error {
                                ui.colored_label(theme.error, err);
                            }

                            ui.add_space(8.0);
                            ui.horizontal(|ui| {
                                let label = if self.login_form.register_mode {
                                    "Create account"
                                } else {
                                    "Log in"
                                };
                                if ui.button(label).clicked() {
                                    submitted = true;
                                }
                                let toggle = if self.login_form.register_mode {
                                    "I already have an account"
                                } else {
                                    "Create an account"
                                };
                                if ui.link(toggle).clicked() {
                                    self.login_form.register_mode = !self.login_form.register_mode;
                                    self.login_form.error = None;
                                }
                            });

                            if submitted {
                                match self.login_form.submit() {
                                    Ok(action) => {
                                        self.login_form.error = None;
                                        self.login_form.password.clear();
                                        self.send_backend(action);
                                    }
                                    Err(e) => self.login_form.error = Some(e),
                                }
                            }
                        });
                });
            });
    }
}
