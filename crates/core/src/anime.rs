//! Watch-status enumeration and validation for anime entries.
//!
//! The status set matches the options the UI offers; it is enforced here
//! so the handler boundary rejects values the store should never see.

/// Maximum length of an anime title in characters.
pub const MAX_ANIME_TITLE_LENGTH: usize = 300;

// ---------------------------------------------------------------------------
// Watch status
// ---------------------------------------------------------------------------

pub const STATUS_PLAN_TO_WATCH: &str = "plan_to_watch";
pub const STATUS_WATCHING: &str = "watching";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid watch-status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PLAN_TO_WATCH,
    STATUS_WATCHING,
    STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}', expected one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate an anime title: non-empty after trimming, within the length cap.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Anime title must not be empty".to_string());
    }
    if title.chars().count() > MAX_ANIME_TITLE_LENGTH {
        return Err(format!(
            "Anime title exceeds maximum length of {MAX_ANIME_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}
