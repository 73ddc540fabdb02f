//! Core application state, separated from UI logic.
//!
//! `ClientState` holds everything that represents the user's session:
//! chats and their histories, uploaded files, profile and status toasts.
//! UI components receive it as a parameter rather than owning it.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Local;

use crate::chat::ChatThread;
use crate::protocol::{ChatSummary, FileRef, Profile, Session};

/// Maximum activity log lines kept before trimming
const MAX_ACTIVITY_LOG: usize = 1000;
/// Number of oldest lines removed when trimming
const ACTIVITY_LOG_TRIM_COUNT: usize = 250;

/// Top-level page shown in the central panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Chat,
    Files,
    Profile,
    Telemetry,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Chat, Page::Files, Page::Profile, Page::Telemetry];

    pub fn label(self) -> &'static str {
        match self {
            Page::Chat => "Chat",
            Page::Files => "Files",
            Page::Profile => "Profile",
            Page::Telemetry => "Telemetry",
        }
    }
}

/// Core application state for the client.
#[derive(Default)]
pub struct ClientState {
    /// Present while logged in.
    pub session: Option<Session>,

    pub profile: Option<Profile>,

    /// Chats in sidebar order (most recent first).
    pub chats: Vec<ChatSummary>,

    /// Message histories keyed by chat id.
    pub threads: HashMap<String, ChatThread>,

    pub active_chat: Option<String>,

    pub page: Page,

    pub files: Vec<FileRef>,

    /// Activity log lines with local timestamps.
    pub activity_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Forget everything tied to the previous session.
    pub fn clear_session(&mut self) {
        self.session = None;
        self.profile = None;
        self.chats.clear();
        self.threads.clear();
        self.active_chat = None;
        self.files.clear();
        self.activity_log.clear();
    }

    pub fn log(&mut self, line: impl AsRef<str>) {
        let ts = Local::now().format("%H:%M:%S");
        self.activity_log.push(format!("[{}] {}", ts, line.as_ref()));
        if self.activity_log.len() > MAX_ACTIVITY_LOG {
            self.activity_log.drain(0..ACTIVITY_LOG_TRIM_COUNT);
        }
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages.push((message.into(), Instant::now()));
    }

    pub fn set_chats(&mut self, chats: Vec<ChatSummary>) {
        self.threads.retain(|id, _| chats.iter().any(|c| &c.id == id));
        if let Some(active) = &self.active_chat {
            if !chats.iter().any(|c| &c.id == active) {
                self.active_chat = None;
            }
        }
        self.chats = chats;
    }

    /// Insert a chat at the top, or update its title in place.
    pub fn upsert_chat(&mut self, chat: ChatSummary) {
        if let Some(existing) = self.chats.iter_mut().find(|c| c.id == chat.id) {
            *existing = chat;
        } else {
            self.chats.insert(0, chat);
        }
    }

    pub fn remove_chat(&mut self, id: &str) {
        self.chats.retain(|c| c.id != id);
        self.threads.remove(id);
        if self.active_chat.as_deref() == Some(id) {
            self.active_chat = None;
        }
    }

    pub fn chat_title(&self, id: &str) -> Option<&str> {
        self.chats
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.as_str())
    }

    /// Get a mutable reference to a thread, creating it if needed.
    pub fn ensure_thread(&mut self, chat_id: &str) -> &mut ChatThread {
        self.threads.entry(chat_id.to_string()).or_default()
    }

    /// Switch to a chat by id. Returns true when its history still needs
    /// to be fetched.
    pub fn switch_to_chat(&mut self, id: &str) -> bool {
        if !self.chats.iter().any(|c| c.id == id) {
            return false;
        }
        self.active_chat = Some(id.to_string());
        self.page = Page::Chat;
        let thread = self.ensure_thread(id);
        thread.clear_unread();
        !thread.loaded
    }

    /// Switch to the next chat in sidebar order.
    pub fn next_chat(&mut self) -> Option<String> {
        self.step_chat(1)
    }

    /// Switch to the previous chat in sidebar order.
    pub fn prev_chat(&mut self) -> Option<String> {
        self.step_chat(-1)
    }

    fn step_chat(&mut self, delta: isize) -> Option<String> {
        if self.chats.is_empty() {
            return None;
        }
        let len = self.chats.len() as isize;
        let idx = match &self.active_chat {
            Some(active) => match self.chats.iter().position(|c| &c.id == active) {
                Some(pos) => (pos as isize + delta).rem_euclid(len),
                None => 0,
            },
            None => 0,
        };
        let id = self.chats[idx as usize].id.clone();
        self.switch_to_chat(&id);
        Some(id)
    }

    pub fn set_files(&mut self, files: Vec<FileRef>) {
        self.files = files;
    }

    pub fn upsert_file(&mut self, file: FileRef) {
        if let Some(existing) = self.files.iter_mut().find(|f| f.id == file.id) {
            *existing = file;
        } else {
            self.files.insert(0, file);
        }
    }

    pub fn remove_file(&mut self, id: &str) {
        self.files.retain(|f| f.id != id);
    }

    pub fn file(&self, id: &str) -> Option<&FileRef> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}
