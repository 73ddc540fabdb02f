//! Messages exchanged between the UI thread and the backend thread, plus the
//! entity types the REST backend returns.

use serde::{Deserialize, Serialize};

/// Authenticated session returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// User profile as stored by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub farm_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A chat as listed in the sidebar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Who wrote a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
    System,
}

/// A single message inside a chat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub author: Author,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Reference to an uploaded file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Authenticate and start a session
    Login { email: String, password: String },
    /// Create an account, then log in
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Drop the session token
    Logout,
    FetchProfile,
    UpdateProfile { name: String, farm_name: Option<String> },
    FetchChats,
    CreateChat { title: String },
    RenameChat { id: String, title: String },
    DeleteChat(String),
    /// Load the message history of a chat
    FetchMessages(String),
    SendMessage { chat_id: String, text: String },
    /// Ask the backend to analyze a message in the context of a chat
    AnalyzeMessage { chat_id: String, text: String },
    FetchFiles,
    /// Upload a local file by path
    UploadFile { path: String },
    RenameFile { id: String, name: String },
    DeleteFile(String),
}

impl BackendAction {
    /// Variant name for logs. Never includes payloads such as passwords.
    pub fn name(&self) -> &'static str {
        match self {
            BackendAction::Login { .. } => "login",
            BackendAction::Register { .. } => "register",
            BackendAction::Logout => "logout",
            BackendAction::FetchProfile => "fetch_profile",
            BackendAction::UpdateProfile { .. } => "update_profile",
            BackendAction::FetchChats => "fetch_chats",
            BackendAction::CreateChat { .. } => "create_chat",
            BackendAction::RenameChat { .. } => "rename_chat",
            BackendAction::DeleteChat(_) => "delete_chat",
            BackendAction::FetchMessages(_) => "fetch_messages",
            BackendAction::SendMessage { .. } => "send_message",
            BackendAction::AnalyzeMessage { .. } => "analyze_message",
            BackendAction::FetchFiles => "fetch_files",
            BackendAction::UploadFile { .. } => "upload_file",
            BackendAction::RenameFile { .. } => "rename_file",
            BackendAction::DeleteFile(_) => "delete_file",
        }
    }

    /// Actions that must carry a bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            BackendAction::Login { .. } | BackendAction::Register { .. } | BackendAction::Logout
        )
    }
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    LoggedIn(Session),
    LoggedOut,
    Profile(Profile),
    Chats(Vec<ChatSummary>),
    ChatCreated(ChatSummary),
    ChatRenamed(ChatSummary),
    ChatDeleted(String),
    Messages {
        chat_id: String,
        messages: Vec<ChatMessage>,
    },
    /// A message was stored (ours or the assistant's reply)
    MessageReceived {
        chat_id: String,
        message: ChatMessage,
    },
    Analysis { chat_id: String, text: String },
    Files(Vec<FileRef>),
    FileUploaded(FileRef),
    FileRenamed(FileRef),
    FileDeleted(String),
    /// Request failed
    Error(String),
    /// Informational message for the activity log
    Status(String),
}
