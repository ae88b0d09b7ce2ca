//! Reaction service
//!
//! Orchestrates the toggle protocol: validates the request, runs the
//! transactional toggle, and publishes the fresh counters to watchers.

use feed_core::entities::{TargetKind, ToggleOutcome};
use feed_core::Snowflake;
use serde_json::json;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a user's reaction on a target.
    ///
    /// Requesting the reaction the user already holds clears it; requesting
    /// the opposite one switches it. The ledger mutation and the counter
    /// deltas commit in one transaction, so a failed call leaves no partial
    /// state and may simply be retried.
    #[instrument(skip(self))]
    pub async fn toggle_reaction(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
        user_id: Snowflake,
        is_like: bool,
    ) -> ServiceResult<ToggleOutcome> {
        if user_id.is_zero() {
            return Err(feed_common::AppError::AuthenticationRequired.into());
        }

        // Comments only carry a like counter
        if target_kind == TargetKind::Comment && !is_like {
            return Err(ServiceError::validation(
                "dislikes are not supported on comments",
            ));
        }

        let outcome = self
            .ctx
            .reaction_repo()
            .toggle(target_kind, target_id, user_id, is_like)
            .await?;

        info!(
            target_id = %target_id,
            target_kind = %target_kind,
            user_id = %user_id,
            ?outcome,
            "Reaction toggled"
        );

        // Push the fresh projection to watchers; delivery is best effort
        if let Ok(Some(stats)) = self.ctx.content_repo().stats(target_kind, target_id).await {
            self.ctx
                .publisher()
                .publish_reaction_updated(
                    target_kind,
                    target_id,
                    json!({
                        "target_id": target_id.to_string(),
                        "target_kind": target_kind.as_str(),
                        "user_id": user_id.to_string(),
                        "current": outcome.current(),
                        "likes": stats.likes,
                        "dislikes": stats.dislikes,
                        "comments": stats.comments,
                    }),
                )
                .await
                .ok();
        }

        Ok(outcome)
    }

    /// The reaction a user currently holds on a target, if any
    #[instrument(skip(self))]
    pub async fn get_user_reaction(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Option<bool>> {
        let reaction = self
            .ctx
            .reaction_repo()
            .find(target_kind, target_id, user_id)
            .await?;

        Ok(reaction.map(|r| r.is_like))
    }
}
