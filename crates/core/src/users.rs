//! User account validation rules.

/// Minimum username length in characters.
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length in characters.
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Validate a username: length bounds, no whitespace.
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if len < USERNAME_MIN_LENGTH {
        return Err(format!(
            "Username must be at least {USERNAME_MIN_LENGTH} characters long"
        ));
    }
    if len > USERNAME_MAX_LENGTH {
        return Err(format!(
            "Username must be at most {USERNAME_MAX_LENGTH} characters long"
        ));
    }
    if username.chars().any(char::is_whitespace) {
        return Err("Username must not contain whitespace".to_string());
    }
    Ok(())
}

/// Validate an email address.
///
/// Deliverability is the mail server's problem; this only rejects values
/// that cannot possibly be addresses.
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}
