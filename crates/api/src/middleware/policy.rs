//! Resource-level authorization policy.
//!
//! Every author/admin check in the API goes through these two functions
//! instead of per-handler conditionals, so the rules cannot drift
//! between endpoints.

use stackit_core::error::CoreError;
use stackit_core::types::DbId;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Allow only the resource's author or an admin.
///
/// Used for question/answer updates and deletions, and for answer
/// acceptance (where the resource is the parent question).
pub fn ensure_author_or_admin(auth: &AuthUser, author_id: DbId) -> Result<(), AppError> {
    if auth.user_id == author_id || auth.is_admin {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to modify this resource".into(),
        )))
    }
}

/// Reject the resource's author. Admins get no exemption: nobody votes
/// on their own post.
pub fn ensure_not_author(
    auth: &AuthUser,
    author_id: DbId,
    message: &str,
) -> Result<(), AppError> {
    if auth.user_id == author_id {
        Err(AppError::Core(CoreError::Forbidden(message.into())))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn user(user_id: DbId, is_admin: bool) -> AuthUser {
        AuthUser { user_id, is_admin }
    }

    #[test]
    fn test_author_allowed() {
        assert!(ensure_author_or_admin(&user(7, false), 7).is_ok());
    }

    #[test]
    fn test_admin_allowed() {
        assert!(ensure_author_or_admin(&user(1, true), 7).is_ok());
    }

    #[test]
    fn test_other_user_forbidden() {
        let err = ensure_author_or_admin(&user(2, false), 7).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));
    }

    #[test]
    fn test_self_vote_forbidden_even_for_admin() {
        let err = ensure_not_author(&user(7, true), 7, "no self-votes").unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));
    }

    #[test]
    fn test_other_user_may_vote() {
        assert!(ensure_not_author(&user(2, false), 7, "no self-votes").is_ok());
    }
}
