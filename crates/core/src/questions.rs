//! Question validation rules and status constants.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum question title length in characters.
pub const TITLE_MIN_LENGTH: usize = 10;

/// Maximum question title length in characters.
pub const TITLE_MAX_LENGTH: usize = 300;

/// Minimum question body length in characters.
pub const CONTENT_MIN_LENGTH: usize = 20;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Question status: a pure classification tag, not load-bearing.
pub const STATUS_OPEN: &str = "open";
pub const STATUS_CLOSED: &str = "closed";
pub const STATUS_DUPLICATE: &str = "duplicate";

/// All valid question statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_OPEN, STATUS_CLOSED, STATUS_DUPLICATE];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a question title: trimmed length must be within bounds.
pub fn validate_title(title: &str) -> Result<(), String> {
    let len = title.trim().chars().count();
    if len < TITLE_MIN_LENGTH {
        return Err(format!(
            "Title must be at least {TITLE_MIN_LENGTH} characters long"
        ));
    }
    if len > TITLE_MAX_LENGTH {
        return Err(format!(
            "Title must be at most {TITLE_MAX_LENGTH} characters long"
        ));
    }
    Ok(())
}

/// Validate a question body.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.chars().count() < CONTENT_MIN_LENGTH {
        return Err(format!(
            "Content must be at least {CONTENT_MIN_LENGTH} characters long"
        ));
    }
    Ok(())
}

/// Validate a question status value.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Valid statuses: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Normalize a tag list: trim, lowercase, drop empties.
///
/// Duplicates are kept; the tag list has plain array semantics.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
