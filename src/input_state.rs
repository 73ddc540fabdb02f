//! Input state for message composition and sent-message history.

/// Maximum entries kept in the sent-message history.
const MAX_HISTORY: usize = 100;

/// Manages the chat composer: current draft and up/down history recall.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Sent messages (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Draft saved when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the draft for sending and remember it in history.
    pub fn take_message(&mut self) -> String {
        let text = std::mem::take(&mut self.message_input);
        if !text.trim().is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
        self.history_pos = None;
        self.history_saved_input = None;
        text
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        if self.history_pos.is_none() {
            // Store current text to restore if user navigates back
            self.history_saved_input = Some(self.message_input.clone());
            self.history_pos = Some(self.history.len() - 1);
        } else if let Some(pos) = self.history_pos {
            if pos > 0 {
                self.history_pos = Some(pos - 1);
            }
        }

        if let Some(pos) = self.history_pos {
            if let Some(h) = self.history.get(pos) {
                self.message_input = h.clone();
            }
        }
    }

    pub fn history_down(&mut self) {
        if let Some(pos) = self.history_pos {
            if pos + 1 < self.history.len() {
                self.history_pos = Some(pos + 1);
                if let Some(h) = self.history.get(pos + 1) {
                    self.message_input = h.clone();
                }
            } else {
                // Exit history navigation
                self.history_pos = None;
                self.message_input = self.history_saved_input.take().unwrap_or_default();
            }
        }
    }
}
