//! Domain layer for the StackIt forum.
//!
//! This crate has no internal dependencies so it can be used by the
//! repository layer, the API layer, and any future CLI tooling alike.
//! It holds the error taxonomy, shared id/timestamp types, and the
//! validation rules for questions, answers, and votes.

pub mod answers;
pub mod error;
pub mod pagination;
pub mod questions;
pub mod types;
pub mod users;
pub mod votes;
