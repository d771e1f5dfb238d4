//! Validation rules for todo items.

/// Maximum length of a todo's text in characters.
pub const MAX_TODO_TEXT_LENGTH: usize = 500;

/// Validate todo text: non-empty after trimming, within the length cap.
pub fn validate_todo_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Todo text must not be empty".to_string());
    }
    if text.chars().count() > MAX_TODO_TEXT_LENGTH {
        return Err(format!(
            "Todo text exceeds maximum length of {MAX_TODO_TEXT_LENGTH} characters"
        ));
    }
    Ok(())
}
