pub mod answers;
pub mod auth;
pub mod questions;
pub mod votes;
