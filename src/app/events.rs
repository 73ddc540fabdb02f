//! Event processing from backend

use super::AgriApp;
use crate::events;
use crate::protocol::GuiEvent;

impl AgriApp {
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.process_single_event(event);
        }
    }

    fn process_single_event(&mut self, event: GuiEvent) {
        // App-level side effects the pure state update doesn't cover
        match &event {
            GuiEvent::LoggedIn(session) => {
                if self.settings.last_email != session.email {
                    self.settings.last_email = session.email.clone();
                    self.persist_settings();
                }
            }
            GuiEvent::LoggedOut => {
                self.dialogs.close_item_dialog();
                self.dialogs.close_confirm_dialog();
                self.dialogs.clear_selected_file();
                self.profile_form = Default::default();
                self.login_form = super::ui::auth::LoginForm::with_email(&self.settings.last_email);
            }
            GuiEvent::Profile(profile) => self.profile_form.seed(profile),
            GuiEvent::FileDeleted(id) => {
                if self.dialogs.selected_file().map(|f| &f.id) == Some(id) {
                    self.dialogs.clear_selected_file();
                }
            }
            GuiEvent::FileRenamed(file) => {
                if self.dialogs.selected_file().map(|f| &f.id) == Some(&file.id) {
                    self.dialogs.select_file(file.clone());
                }
            }
            _ => {}
        }

        for action in events::process_single_event(&mut self.state, event) {
            self.send_backend(action);
        }
    }
}
