//! Vote domain types.
//!
//! A vote targets either a question or an answer and is always one of
//! two directions. The ledger (`votes` table) is the source of truth;
//! each target also carries denormalized `upvotes`/`downvotes` id arrays
//! that must agree with the ledger at all times.

use serde::{Deserialize, Serialize};

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    /// Parse a wire value (`"upvote"` / `"downvote"`).
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "upvote" => Ok(VoteType::Upvote),
            "downvote" => Ok(VoteType::Downvote),
            other => Err(format!("Invalid vote type '{other}'")),
        }
    }

    /// The wire/storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            VoteType::Upvote => "upvote",
            VoteType::Downvote => "downvote",
        }
    }

    /// The denormalized cache column this direction maps to.
    pub fn cache_column(self) -> &'static str {
        match self {
            VoteType::Upvote => "upvotes",
            VoteType::Downvote => "downvotes",
        }
    }

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            VoteType::Upvote => VoteType::Downvote,
            VoteType::Downvote => VoteType::Upvote,
        }
    }
}

/// What a vote applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteTarget {
    Question,
    Answer,
}

impl VoteTarget {
    /// The storage representation in the ledger's `target_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            VoteTarget::Question => "question",
            VoteTarget::Answer => "answer",
        }
    }

    /// The table holding the denormalized vote cache for this target.
    pub fn table(self) -> &'static str {
        match self {
            VoteTarget::Question => "questions",
            VoteTarget::Answer => "answers",
        }
    }
}

/// Net effect of a cast-vote call on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// No prior vote existed; a ledger row was created.
    Added,
    /// The same direction was repeated; the ledger row was deleted.
    Removed,
    /// The opposite direction existed; the ledger row was flipped.
    Updated,
}

impl VoteOutcome {
    /// Human-readable message returned to the caller.
    pub fn message(self) -> &'static str {
        match self {
            VoteOutcome::Added => "Vote added",
            VoteOutcome::Removed => "Vote removed",
            VoteOutcome::Updated => "Vote updated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vote_type() {
        assert_eq!(VoteType::parse("upvote").unwrap(), VoteType::Upvote);
        assert_eq!(VoteType::parse("downvote").unwrap(), VoteType::Downvote);
        assert!(VoteType::parse("sideways").is_err());
        assert!(VoteType::parse("").is_err());
        // Parsing is case-sensitive, matching the wire contract.
        assert!(VoteType::parse("Upvote").is_err());
    }

    #[test]
    fn test_cache_columns() {
        assert_eq!(VoteType::Upvote.cache_column(), "upvotes");
        assert_eq!(VoteType::Downvote.cache_column(), "downvotes");
    }

    #[test]
    fn test_opposite() {
        assert_eq!(VoteType::Upvote.opposite(), VoteType::Downvote);
        assert_eq!(VoteType::Downvote.opposite(), VoteType::Upvote);
    }

    #[test]
    fn test_target_tables() {
        assert_eq!(VoteTarget::Question.table(), "questions");
        assert_eq!(VoteTarget::Answer.table(), "answers");
        assert_eq!(VoteTarget::Question.as_str(), "question");
        assert_eq!(VoteTarget::Answer.as_str(), "answer");
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(VoteOutcome::Added.message(), "Vote added");
        assert_eq!(VoteOutcome::Removed.message(), "Vote removed");
        assert_eq!(VoteOutcome::Updated.message(), "Vote updated");
    }
}
