//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, Content, ContentKind, InteractionStats, Reaction, TargetKind, ToggleOutcome};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Cursor pagination options for listing queries
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub before: Option<Snowflake>,
    pub after: Option<Snowflake>,
    pub limit: i64,
}

// ============================================================================
// Content Repository
// ============================================================================

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Find a content item by kind and ID
    async fn find_by_id(&self, kind: ContentKind, id: Snowflake) -> RepoResult<Option<Content>>;

    /// List content items, newest first, optionally filtered by kind
    async fn list(&self, kind: Option<ContentKind>, query: PageQuery) -> RepoResult<Vec<Content>>;

    /// Create a new content item (counters start at zero)
    async fn create(&self, content: &Content) -> RepoResult<()>;

    /// Read the projected interaction counters for a content item or comment.
    ///
    /// This never consults the reaction ledger; the projection is
    /// authoritative between transactions.
    async fn stats(&self, kind: TargetKind, id: Snowflake) -> RepoResult<Option<InteractionStats>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments on a content item, oldest first
    async fn find_by_content(
        &self,
        kind: ContentKind,
        content_id: Snowflake,
        query: PageQuery,
    ) -> RepoResult<Vec<Comment>>;

    /// Append a comment.
    ///
    /// Inserts the row and increments the owning content item's
    /// comment_count (relative increment) in the same transaction; either
    /// both land or neither does. Fails with `ContentNotFound` if the owning
    /// item does not exist.
    async fn create(&self, comment: &Comment) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the ledger row for a (target, user) tuple, if any
    async fn find(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Reaction>>;

    /// Toggle a user's reaction on a target.
    ///
    /// Runs the whole read-decide-write sequence as one transaction:
    /// existing ledger rows for the tuple are removed (with matching counter
    /// decrements), and a new row is written iff there was no existing row or
    /// the existing row had the opposite `is_like` (with a matching counter
    /// increment). Fails with a not-found error if the target does not
    /// exist, and with `WriteConflict` if the transaction loses a race.
    async fn toggle(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
        user_id: Snowflake,
        is_like: bool,
    ) -> RepoResult<ToggleOutcome>;

    /// Count ledger rows for a target, grouped by polarity: (likes, dislikes).
    ///
    /// Reads the ledger, not the projection; used to audit that the two agree.
    async fn count_for(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<(i64, i64)>;
}
