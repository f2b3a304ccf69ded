//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (joined author columns included where listings need them)
//! - A create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod answer;
pub mod question;
pub mod user;
pub mod vote;
