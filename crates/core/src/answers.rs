//! Answer validation rules.

/// Minimum answer body length in characters.
pub const CONTENT_MIN_LENGTH: usize = 10;

/// Validate an answer body.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.chars().count() < CONTENT_MIN_LENGTH {
        return Err(format!(
            "Answer content must be at least {CONTENT_MIN_LENGTH} characters long"
        ));
    }
    Ok(())
}
