//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-row invariants
//! (vote ledger/cache agreement, single accepted answer, deletion
//! cascades) are maintained inside single transactions.

pub mod answer_repo;
pub mod question_repo;
pub mod user_repo;
pub mod vote_repo;

pub use answer_repo::AnswerRepo;
pub use question_repo::QuestionRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
