use crate::protocol::ChatMessage;

/// Maximum messages to keep in a thread before trimming
const MAX_THREAD_MESSAGES: usize = 2000;
/// Number of oldest messages to remove when trimming
const THREAD_TRIM_COUNT: usize = 500;

/// Message history and unread bookkeeping for one chat
#[derive(Default, Clone, Debug)]
pub struct ChatThread {
    pub messages: Vec<ChatMessage>,
    /// Number of unread messages
    pub unread_count: usize,
    /// Whether the history has been fetched from the backend
    pub loaded: bool,
    /// Latest analysis result for this chat, if any
    pub analysis: Option<String>,
}

impl ChatThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the history with what the backend returned.
    pub fn set_history(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.loaded = true;
        self.trim();
    }

    /// Append a message. Duplicate ids (echo of our own send) are ignored.
    pub fn add_message(&mut self, msg: ChatMessage, is_active: bool) {
        if self.messages.iter().any(|m| m.id == msg.id) {
            return;
        }
        self.messages.push(msg);
        if !is_active {
            self.unread_count += 1;
        }
        self.trim();
    }

    pub fn clear_unread(&mut self) {
        self.unread_count = 0;
    }

    fn trim(&mut self) {
        if self.messages.len() > MAX_THREAD_MESSAGES {
            self.messages.drain(0..THREAD_TRIM_COUNT);
        }
    }
}
