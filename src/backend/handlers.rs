//! Handlers that execute backend actions against the REST API.

use std::path::Path;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError};
use crate::protocol::{BackendAction, GuiEvent};

fn report_error(event_tx: &Sender<GuiEvent>, context: &str, err: ApiError) {
    warn!("{} failed: {}", context, err);
    let _ = event_tx.send(GuiEvent::Error(format!("{} failed: {}", context, err)));
}

/// Handle a backend action from the GUI
pub async fn handle_backend_action(
    action: BackendAction,
    client: &mut ApiClient,
    event_tx: &Sender<GuiEvent>,
) {
    debug!(action = action.name(), "handling backend action");

    if action.requires_auth() && !client.is_authenticated() {
        report_error(event_tx, action.name(), ApiError::Unauthenticated);
        return;
    }

    match action {
        BackendAction::Login { email, password } => match client.login(&email, &password).await {
            Ok(session) => {
                let _ = event_tx.send(GuiEvent::LoggedIn(session));
            }
            Err(e) => report_error(event_tx, "Login", e),
        },

        BackendAction::Register {
            name,
            email,
            password,
        } => {
            if let Err(e) = client.register(&name, &email, &password).await {
                report_error(event_tx, "Registration", e);
                return;
            }
            let _ = event_tx.send(GuiEvent::Status(format!("Account created for {}", email)));
            match client.login(&email, &password).await {
                Ok(session) => {
                    let _ = event_tx.send(GuiEvent::LoggedIn(session));
                }
                Err(e) => report_error(event_tx, "Login", e),
            }
        }

        BackendAction::Logout => {
            client.logout();
            let _ = event_tx.send(GuiEvent::LoggedOut);
        }

        BackendAction::FetchProfile => match client.profile().await {
            Ok(profile) => {
                let _ = event_tx.send(GuiEvent::Profile(profile));
            }
            Err(e) => report_error(event_tx, "Loading profile", e),
        },

        BackendAction::UpdateProfile { name, farm_name } => {
            match client.update_profile(&name, farm_name.as_deref()).await {
                Ok(profile) => {
                    let _ = event_tx.send(GuiEvent::Profile(profile));
                    let _ = event_tx.send(GuiEvent::Status("Profile saved".into()));
                }
                Err(e) => report_error(event_tx, "Saving profile", e),
            }
        }

        BackendAction::FetchChats => match client.chats().await {
            Ok(chats) => {
                let _ = event_tx.send(GuiEvent::Chats(chats));
            }
            Err(e) => report_error(event_tx, "Fetching chats", e),
        },

        BackendAction::CreateChat { title } => match client.create_chat(&title).await {
            Ok(chat) => {
                let _ = event_tx.send(GuiEvent::ChatCreated(chat));
            }
            Err(e) => report_error(event_tx, "Creating chat", e),
        },

        BackendAction::RenameChat { id, title } => match client.rename_chat(&id, &title).await {
            Ok(chat) => {
                let _ = event_tx.send(GuiEvent::ChatRenamed(chat));
            }
            Err(e) => report_error(event_tx, "Renaming chat", e),
        },

        BackendAction::DeleteChat(id) => match client.delete_chat(&id).await {
            Ok(()) => {
                let _ = event_tx.send(GuiEvent::ChatDeleted(id));
            }
            Err(e) => report_error(event_tx, "Deleting chat", e),
        },

        BackendAction::FetchMessages(chat_id) => match client.messages(&chat_id).await {
            Ok(messages) => {
                let _ = event_tx.send(GuiEvent::Messages { chat_id, messages });
            }
            Err(e) => report_error(event_tx, "Loading messages", e),
        },

        BackendAction::SendMessage { chat_id, text } => {
            match client.send_message(&chat_id, &text).await {
                Ok(messages) => {
                    for message in messages {
                        let _ = event_tx.send(GuiEvent::MessageReceived {
                            chat_id: chat_id.clone(),
                            message,
                        });
                    }
                }
                Err(e) => report_error(event_tx, "Sending message", e),
            }
        }

        BackendAction::AnalyzeMessage { chat_id, text } => {
            match client.analyze(&chat_id, &text).await {
                Ok(text) => {
                    let _ = event_tx.send(GuiEvent::Analysis { chat_id, text });
                }
                Err(e) => report_error(event_tx, "Analysis", e),
            }
        }

        BackendAction::FetchFiles => match client.files().await {
            Ok(files) => {
                let _ = event_tx.send(GuiEvent::Files(files));
            }
            Err(e) => report_error(event_tx, "Fetching files", e),
        },

        BackendAction::UploadFile { path } => {
            let _ = event_tx.send(GuiEvent::Status(format!("Uploading {}...", path)));
            match client.upload_file(Path::new(&path)).await {
                Ok(file) => {
                    let _ = event_tx.send(GuiEvent::FileUploaded(file));
                }
                Err(e) => report_error(event_tx, "Upload", e),
            }
        }

        BackendAction::RenameFile { id, name } => match client.rename_file(&id, &name).await {
            Ok(file) => {
                let _ = event_tx.send(GuiEvent::FileRenamed(file));
            }
            Err(e) => report_error(event_tx, "Renaming file", e),
        },

        BackendAction::DeleteFile(id) => match client.delete_file(&id).await {
            Ok(()) => {
                let _ = event_tx.send(GuiEvent::FileDeleted(id));
            }
            Err(e) => report_error(event_tx, "Deleting file", e),
        },
    }
}
