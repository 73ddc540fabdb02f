//! Core AgriApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;
use tracing::{error, info};

use crate::app::ui::auth::LoginForm;
use crate::app::ui::panels::ProfileForm;
use crate::backend::run_backend;
use crate::config::{save_settings, Settings};
use crate::dialog_coordinator::DialogCoordinator;
use crate::input_state::InputState;
use crate::protocol::{BackendAction, FileRef, GuiEvent};
use crate::state::ClientState;
use crate::ui;

/// Requests raised from inside dialog callbacks.
///
/// Callbacks cannot borrow the app, so they send one of these and the app
/// applies it on the next drain.
#[derive(Debug, Clone)]
pub enum AppCommand {
    Backend(BackendAction),
    SelectFile(FileRef),
    OpenChat(String),
}

pub struct AgriApp {
    // Session data (chats, files, profile, toasts)
    pub state: ClientState,

    pub settings: Settings,
    pub theme: ui::theme::AgriTheme,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Channel dialog callbacks use to reach the app
    pub command_tx: Sender<AppCommand>,
    pub command_rx: Receiver<AppCommand>,

    // Dialog state, owned here and lent to whoever opens or renders dialogs
    pub dialogs: DialogCoordinator,
    pub item_dialog_view: ui::dialogs::ItemDialogView,
    pub help_dialog: ui::dialogs::HelpDialog,

    // Form inputs
    pub input: InputState,
    pub login_form: LoginForm,
    pub profile_form: ProfileForm,

    /// Whether settings are written to disk (off for headless instances)
    persist: bool,
}

impl AgriApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        let api_base_url = settings.api_base_url.clone();
        thread::spawn(move || {
            run_backend(api_base_url, action_rx, event_tx);
        });

        let mut app = Self::from_parts(settings, action_tx, event_rx);
        app.persist = true;

        match app.settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }
        ui::theme::apply_app_style(&cc.egui_ctx, &app.theme);

        info!(api = %app.settings.api_base_url, "client started");
        app
    }

    /// Build the app around existing backend channels (no egui context).
    pub fn from_parts(
        settings: Settings,
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
    ) -> Self {
        let (command_tx, command_rx) = unbounded::<AppCommand>();
        let theme = ui::theme::AgriTheme::by_name(&settings.theme);
        let login_form = LoginForm::with_email(&settings.last_email);

        Self {
            state: ClientState::new(),
            settings,
            theme,
            action_tx,
            event_rx,
            command_tx,
            command_rx,
            dialogs: DialogCoordinator::new(),
            item_dialog_view: ui::dialogs::ItemDialogView::new(),
            help_dialog: ui::dialogs::HelpDialog::new(),
            input: InputState::new(),
            login_form,
            profile_form: ProfileForm::default(),
            persist: false,
        }
    }

    pub(crate) fn send_backend(&self, action: BackendAction) {
        if self.action_tx.send(action).is_err() {
            error!("backend thread is gone; action dropped");
        }
    }

    /// Switch the active chat and fetch its history if needed.
    pub fn open_chat(&mut self, id: &str) {
        if self.state.switch_to_chat(id) {
            self.send_backend(BackendAction::FetchMessages(id.to_string()));
        }
    }

    /// Apply every command queued by dialog callbacks.
    pub fn drain_commands(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                AppCommand::Backend(action) => self.send_backend(action),
                AppCommand::SelectFile(file) => {
                    self.state.push_status(format!("Selected {}", file.name));
                    self.dialogs.select_file(file);
                }
                AppCommand::OpenChat(id) => self.open_chat(&id),
            }
        }
    }

    pub fn set_theme(&mut self, ctx: &egui::Context, name: &str) {
        self.settings.theme = name.to_string();
        self.theme = ui::theme::AgriTheme::by_name(name);
        match name {
            "light" => ctx.set_visuals(egui::Visuals::light()),
            _ => ctx.set_visuals(egui::Visuals::dark()),
        }
        ui::theme::apply_app_style(ctx, &self.theme);
        self.persist_settings();
    }

    pub(crate) fn persist_settings(&self) {
        if !self.persist {
            return;
        }
        if let Err(e) = save_settings(&self.settings) {
            error!("Failed to save settings: {}", e);
        }
    }
}

impl Drop for AgriApp {
    fn drop(&mut self) {
        // Persist settings on exit
        self.persist_settings();
    }
}
