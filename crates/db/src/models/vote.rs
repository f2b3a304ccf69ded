//! Vote ledger model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stackit_core::types::{DbId, Timestamp};

/// A row from the `votes` ledger.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub target_type: String,
    pub target_id: DbId,
    pub vote_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for the cast-vote endpoints.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    #[serde(rename = "voteType")]
    pub vote_type: String,
}
