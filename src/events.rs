//! Backend event processing (session, chats, messages, files).

use tracing::{info, warn};

use crate::protocol::{BackendAction, GuiEvent, Session};
use crate::state::ClientState;

/// Apply one backend event to the client state.
///
/// Returns follow-up requests the app should send to the backend, e.g. the
/// initial data loads after a successful login.
pub fn process_single_event(state: &mut ClientState, event: GuiEvent) -> Vec<BackendAction> {
    let mut follow_ups = Vec::new();

    match event {
        GuiEvent::LoggedIn(Session {
            token,
            email,
            user_id,
        }) => {
            info!(%email, "logged in");
            state.log(format!("Logged in as {}", email));
            state.push_status(format!("Welcome, {}", email));
            state.session = Some(Session {
                token,
                email,
                user_id,
            });
            follow_ups.push(BackendAction::FetchProfile);
            follow_ups.push(BackendAction::FetchChats);
            follow_ups.push(BackendAction::FetchFiles);
        }

        GuiEvent::LoggedOut => {
            state.clear_session();
            state.log("Logged out");
            state.push_status("Logged out");
        }

        GuiEvent::Profile(profile) => {
            state.profile = Some(profile);
        }

        GuiEvent::Chats(chats) => {
            state.set_chats(chats);
            if state.active_chat.is_none() {
                if let Some(first) = state.chats.first().map(|c| c.id.clone()) {
                    if state.switch_to_chat(&first) {
                        follow_ups.push(BackendAction::FetchMessages(first));
                    }
                }
            }
        }

        GuiEvent::ChatCreated(chat) => {
            let id = chat.id.clone();
            state.log(format!("Created chat \"{}\"", chat.title));
            state.upsert_chat(chat);
            // A fresh chat has no history to fetch
            state.ensure_thread(&id).set_history(Vec::new());
            state.switch_to_chat(&id);
        }

        GuiEvent::ChatRenamed(chat) => {
            state.log(format!("Renamed chat to \"{}\"", chat.title));
            state.upsert_chat(chat);
        }

        GuiEvent::ChatDeleted(id) => {
            let title = state.chat_title(&id).unwrap_or(id.as_str()).to_string();
            state.remove_chat(&id);
            state.log(format!("Deleted chat \"{}\"", title));
            state.push_status("Chat deleted");
        }

        GuiEvent::Messages { chat_id, messages } => {
            state.ensure_thread(&chat_id).set_history(messages);
        }

        GuiEvent::MessageReceived { chat_id, message } => {
            let is_active = state.active_chat.as_deref() == Some(chat_id.as_str());
            state.ensure_thread(&chat_id).add_message(message, is_active);
        }

        GuiEvent::Analysis { chat_id, text } => {
            state.ensure_thread(&chat_id).analysis = Some(text);
            state.push_status("Analysis ready");
        }

        GuiEvent::Files(files) => {
            state.set_files(files);
        }

        GuiEvent::FileUploaded(file) => {
            state.log(format!("Uploaded {}", file.name));
            state.push_status(format!("Uploaded {}", file.name));
            state.upsert_file(file);
        }

        GuiEvent::FileRenamed(file) => {
            state.log(format!("Renamed file to {}", file.name));
            state.upsert_file(file);
        }

        GuiEvent::FileDeleted(id) => {
            let name = state.file(&id).map(|f| f.name.clone()).unwrap_or(id.clone());
            state.remove_file(&id);
            state.log(format!("Deleted {}", name));
            state.push_status("File deleted");
        }

        GuiEvent::Error(msg) => {
            warn!("{}", msg);
            state.log(format!("⚠ {}", msg));
            state.push_status(format!("Error: {}", msg));
        }

        GuiEvent::Status(msg) => {
            state.log(&msg);
        }
    }

    follow_ups
}
