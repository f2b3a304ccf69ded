//! User account model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stackit_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// The password hash never leaves the server; it is skipped on
/// serialization so the struct can be returned from profile endpoints
/// directly.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub reputation: i64,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert data for a new user. The hash is produced by the API layer
/// before this struct is built.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for profile updates. `None` fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}
