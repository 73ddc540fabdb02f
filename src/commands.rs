//! Slash commands typed into the chat composer (/new, /analyze, etc.).

/// A parsed composer command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Create a chat; without a title the "new chat" dialog opens
    New(Option<String>),
    /// Rename the active chat; without a title the rename dialog opens
    Rename(Option<String>),
    /// Delete the active chat (asks for confirmation)
    Delete,
    /// Analyze the given text, or the last message of the active chat
    Analyze(Option<String>),
    /// Open the upload dialog
    Upload,
    Help,
}

pub const HELP_TEXT: &str =
    "Commands: /new [title], /rename [title], /delete, /analyze [text], /upload, /help";

fn rest_or_none(rest: &str) -> Option<String> {
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// Parse composer input.
///
/// Returns `None` for ordinary messages, `Some(Err(usage))` for unknown
/// commands.
pub fn parse_command(input: &str) -> Option<Result<ChatCommand, String>> {
    let s = input.trim();
    let cmdline = s.strip_prefix('/')?;

    let (cmd, rest) = match cmdline.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest),
        None => (cmdline, ""),
    };

    let parsed = match cmd.to_lowercase().as_str() {
        "new" | "n" => Ok(ChatCommand::New(rest_or_none(rest))),
        "rename" | "r" => Ok(ChatCommand::Rename(rest_or_none(rest))),
        "delete" | "del" => Ok(ChatCommand::Delete),
        "analyze" | "analyse" | "a" => Ok(ChatCommand::Analyze(rest_or_none(rest))),
        "upload" | "up" => Ok(ChatCommand::Upload),
        "help" | "?" => Ok(ChatCommand::Help),
        unknown => Err(format!("Unknown command: /{}. {}", unknown, HELP_TEXT)),
    };
    Some(parsed)
}
