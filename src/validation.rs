//! Input validation for forms and dialog submissions

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_TITLE_LEN: usize = 80;
const MAX_FILE_NAME_LEN: usize = 255;
const MAX_MESSAGE_LEN: usize = 4000;
const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex pattern is valid")
});

/// Validates a chat title
pub fn validate_chat_title(title: &str) -> Result<(), String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Chat title cannot be empty".to_string());
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!("Chat title too long (max {} characters)", MAX_TITLE_LEN));
    }

    if title.contains(|c: char| c.is_control()) {
        return Err("Chat title contains invalid characters".to_string());
    }

    Ok(())
}

/// Validates a file name used when renaming an uploaded file
pub fn validate_file_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("File name cannot be empty".to_string());
    }

    if name.len() > MAX_FILE_NAME_LEN {
        return Err(format!("File name too long (max {} bytes)", MAX_FILE_NAME_LEN));
    }

    // No path separators: the backend stores a flat namespace
    if name.contains(|c: char| c.is_control() || c == '/' || c == '\\') {
        return Err("File name contains invalid characters".to_string());
    }

    if name == "." || name == ".." {
        return Err("File name is reserved".to_string());
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Email address is not valid".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Validates a chat message before it is sent
pub fn validate_message(msg: &str) -> Result<(), String> {
    if msg.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }

    if msg.chars().count() > MAX_MESSAGE_LEN {
        return Err(format!("Message too long (max {} characters)", MAX_MESSAGE_LEN));
    }

    Ok(())
}

/// Sanitizes a message by removing NULs and trailing whitespace
pub fn sanitize_message(msg: &str) -> String {
    msg.chars()
        .filter(|&c| c != '\0')
        .take(MAX_MESSAGE_LEN)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Validates a local path chosen for upload
pub fn validate_upload_path(path: &str) -> Result<(), String> {
    let path = path.trim();
    if path.is_empty() {
        return Err("Choose a file to upload".to_string());
    }
    let p = std::path::Path::new(path);
    if !p.exists() {
        return Err(format!("File not found: {}", path));
    }
    if !p.is_file() {
        return Err(format!("Not a regular file: {}", path));
    }
    Ok(())
}

/// Validates the REST backend base URL (http or https)
pub fn validate_api_base_url(url: &str) -> Result<(), String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("API URL cannot be empty".to_string());
    }

    let parsed = reqwest::Url::parse(url).map_err(|e| format!("API URL is not valid: {}", e))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err("API URL must start with http:// or https://".to_string());
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err("API URL is missing a host".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_chat_title() {
        assert!(validate_chat_title("Irrigation plan").is_ok());
        assert!(validate_chat_title("  Soil moisture  ").is_ok());
        assert!(validate_chat_title("Урожай 2026").is_ok());

        assert!(validate_chat_title("").is_err());
        assert!(validate_chat_title("   ").is_err());
        assert!(validate_chat_title("bad\ttitle").is_err());
        assert!(validate_chat_title(&"x".repeat(81)).is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("yield-2026.csv").is_ok());
        assert!(validate_file_name("field photo.jpg").is_ok());

        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("../etc").is_err());
        assert!(validate_file_name("a\\b").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name(&"a".repeat(256)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("grower@farm.io").is_ok());
        assert!(validate_email(" a.b@c.de ").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("farm.io").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a b@c.de").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("When should I irrigate?").is_ok());
        assert!(validate_message("Multi\nline").is_ok());

        assert!(validate_message("").is_err());
        assert!(validate_message(" \n ").is_err());
        assert!(validate_message(&"x".repeat(4001)).is_err());
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("Hello"), "Hello");
        assert_eq!(sanitize_message("He\0llo  \n"), "Hello");
        assert_eq!(sanitize_message(&"x".repeat(5000)).len(), 4000);
    }

    #[test]
    fn test_validate_upload_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("yield.csv");
        std::fs::write(&file, "field,tons\n").unwrap();

        assert!(validate_upload_path(file.to_str().unwrap()).is_ok());
        assert!(validate_upload_path("").is_err());
        assert!(validate_upload_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_upload_path(dir.path().join("missing.csv").to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_api_base_url() {
        assert!(validate_api_base_url("https://api.example.com/api/").is_ok());
        assert!(validate_api_base_url("http://localhost:8000").is_ok());

        assert!(validate_api_base_url("").is_err());
        assert!(validate_api_base_url("ftp://example.com").is_err());
        assert!(validate_api_base_url("https://").is_err());
        assert!(validate_api_base_url("https://exa mple.com").is_err());
    }
}
