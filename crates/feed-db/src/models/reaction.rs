//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table (the ledger)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub target_id: i64,
    /// Target kind: 'thread', 'video', 'reel', 'comment'
    pub target_kind: String,
    pub user_id: i64,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
}

/// Ledger counts grouped by polarity (from query)
#[derive(Debug, Clone, FromRow)]
pub struct LedgerCountModel {
    pub is_like: bool,
    pub count: i64,
}
