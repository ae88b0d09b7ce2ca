//! PostgreSQL implementation of ReactionRepository
//!
//! Hosts the reaction toggle protocol: the read-decide-write sequence for a
//! (target, user) tuple runs inside one transaction, serialized per target by
//! a row lock, with the projected counters maintained through relative
//! increments in the same transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use feed_core::entities::{Reaction, TargetKind, ToggleOutcome};
use feed_core::traits::{ReactionRepository, RepoResult};
use feed_core::value_objects::Snowflake;

use crate::mappers::target_kind_to_str;
use crate::models::{LedgerCountModel, ReactionModel};

use super::error::{comment_not_found, content_not_found, map_db_error, map_tx_error};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the target row for the duration of the transaction.
    ///
    /// The lock serializes concurrent toggles on the same target, so the
    /// ledger read that drives the toggle decision cannot be invalidated by
    /// a concurrently-committing toggle. Doubles as the existence check.
    async fn lock_target(
        tx: &mut Transaction<'_, Postgres>,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<()> {
        let locked = match target_kind.content_kind() {
            Some(kind) => sqlx::query_scalar::<_, i64>(
                r#"
                SELECT id FROM contents WHERE id = $1 AND kind = $2 FOR UPDATE
                "#,
            )
            .bind(target_id.into_inner())
            .bind(kind.as_str())
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)?,
            None => sqlx::query_scalar::<_, i64>(
                r#"
                SELECT id FROM comments WHERE id = $1 FOR UPDATE
                "#,
            )
            .bind(target_id.into_inner())
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)?,
        };

        match locked {
            Some(_) => Ok(()),
            None if target_kind == TargetKind::Comment => Err(comment_not_found(target_id)),
            None => Err(content_not_found(target_id)),
        }
    }

    /// Apply net counter deltas to the locked target.
    ///
    /// Always a relative increment; comments only carry a like counter, so a
    /// dislike delta against a comment (possible only while sweeping up
    /// legacy duplicate rows) is dropped rather than tracked invisibly.
    async fn apply_counter_deltas(
        tx: &mut Transaction<'_, Postgres>,
        target_kind: TargetKind,
        target_id: Snowflake,
        like_delta: i32,
        dislike_delta: i32,
    ) -> RepoResult<()> {
        if like_delta == 0 && dislike_delta == 0 {
            return Ok(());
        }

        match target_kind.content_kind() {
            Some(kind) => {
                sqlx::query(
                    r#"
                    UPDATE contents
                    SET likes = likes + $3, dislikes = dislikes + $4, updated_at = NOW()
                    WHERE id = $1 AND kind = $2
                    "#,
                )
                .bind(target_id.into_inner())
                .bind(kind.as_str())
                .bind(like_delta)
                .bind(dislike_delta)
                .execute(&mut **tx)
                .await
                .map_err(map_tx_error)?;
            }
            None => {
                if like_delta != 0 {
                    sqlx::query(
                        r#"
                        UPDATE comments
                        SET likes = likes + $2, updated_at = NOW()
                        WHERE id = $1
                        "#,
                    )
                    .bind(target_id.into_inner())
                    .bind(like_delta)
                    .execute(&mut **tx)
                    .await
                    .map_err(map_tx_error)?;
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT target_id, target_kind, user_id, is_like, created_at
            FROM reactions
            WHERE target_id = $1 AND target_kind = $2 AND user_id = $3
            "#,
        )
        .bind(target_id.into_inner())
        .bind(target_kind_to_str(target_kind))
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
        user_id: Snowflake,
        is_like: bool,
    ) -> RepoResult<ToggleOutcome> {
        let kind_str = target_kind_to_str(target_kind);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        Self::lock_target(&mut tx, target_kind, target_id).await?;

        // The ledger rows for this tuple. One row at most when the unique
        // index has been in place; several only for rows predating it, which
        // the delete below sweeps up in the same pass.
        let existing = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT target_id, target_kind, user_id, is_like, created_at
            FROM reactions
            WHERE target_id = $1 AND target_kind = $2 AND user_id = $3
            "#,
        )
        .bind(target_id.into_inner())
        .bind(kind_str)
        .bind(user_id.into_inner())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Re-requesting a held reaction clears it instead of duplicating it
        let write_new = existing.is_empty() || existing.iter().any(|r| r.is_like != is_like);

        let mut like_delta: i32 = 0;
        let mut dislike_delta: i32 = 0;

        if !existing.is_empty() {
            for row in &existing {
                if row.is_like {
                    like_delta -= 1;
                } else {
                    dislike_delta -= 1;
                }
            }

            sqlx::query(
                r#"
                DELETE FROM reactions
                WHERE target_id = $1 AND target_kind = $2 AND user_id = $3
                "#,
            )
            .bind(target_id.into_inner())
            .bind(kind_str)
            .bind(user_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        if write_new {
            sqlx::query(
                r#"
                INSERT INTO reactions (target_id, target_kind, user_id, is_like, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                "#,
            )
            .bind(target_id.into_inner())
            .bind(kind_str)
            .bind(user_id.into_inner())
            .bind(is_like)
            .execute(&mut *tx)
            .await
            .map_err(map_tx_error)?;

            if is_like {
                like_delta += 1;
            } else {
                dislike_delta += 1;
            }
        }

        Self::apply_counter_deltas(&mut tx, target_kind, target_id, like_delta, dislike_delta)
            .await?;

        tx.commit().await.map_err(map_tx_error)?;

        let outcome = if !write_new {
            ToggleOutcome::Cleared { was_like: is_like }
        } else if existing.is_empty() {
            ToggleOutcome::Set { is_like }
        } else {
            ToggleOutcome::Switched { is_like }
        };

        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn count_for(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> RepoResult<(i64, i64)> {
        let rows = sqlx::query_as::<_, LedgerCountModel>(
            r#"
            SELECT is_like, COUNT(*) as count
            FROM reactions
            WHERE target_id = $1 AND target_kind = $2
            GROUP BY is_like
            "#,
        )
        .bind(target_id.into_inner())
        .bind(target_kind_to_str(target_kind))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut likes = 0;
        let mut dislikes = 0;
        for row in rows {
            if row.is_like {
                likes = row.count;
            } else {
                dislikes = row.count;
            }
        }

        Ok((likes, dislikes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
