//! PostgreSQL implementation of CommentRepository
//!
//! The append operation is the write half of the comment-counter contract:
//! the comment row and the owning content's comment_count increment commit
//! in one transaction or not at all.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Comment, ContentKind};
use feed_core::traits::{CommentRepository, PageQuery, RepoResult};
use feed_core::value_objects::Snowflake;

use crate::mappers::{content_kind_to_str, CommentInsert};
use crate::models::CommentModel;

use super::error::{content_not_found, map_db_error, map_tx_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, content_id, content_kind, author_id, text, parent_id,
                   likes, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_content(
        &self,
        kind: ContentKind,
        content_id: Snowflake,
        query: PageQuery,
    ) -> RepoResult<Vec<Comment>> {
        let limit = query.limit.clamp(1, 100);

        let results = match (query.before, query.after) {
            (Some(before), None) => {
                sqlx::query_as::<_, CommentModel>(
                    r#"
                    SELECT id, content_id, content_kind, author_id, text, parent_id,
                           likes, created_at, updated_at
                    FROM comments
                    WHERE content_id = $1 AND content_kind = $2 AND id < $3
                    ORDER BY id ASC
                    LIMIT $4
                    "#,
                )
                .bind(content_id.into_inner())
                .bind(content_kind_to_str(kind))
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(after)) => {
                sqlx::query_as::<_, CommentModel>(
                    r#"
                    SELECT id, content_id, content_kind, author_id, text, parent_id,
                           likes, created_at, updated_at
                    FROM comments
                    WHERE content_id = $1 AND content_kind = $2 AND id > $3
                    ORDER BY id ASC
                    LIMIT $4
                    "#,
                )
                .bind(content_id.into_inner())
                .bind(content_kind_to_str(kind))
                .bind(after.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                // Oldest first (conversation order)
                sqlx::query_as::<_, CommentModel>(
                    r#"
                    SELECT id, content_id, content_kind, author_id, text, parent_id,
                           likes, created_at, updated_at
                    FROM comments
                    WHERE content_id = $1 AND content_kind = $2
                    ORDER BY id ASC
                    LIMIT $3
                    "#,
                )
                .bind(content_id.into_inner())
                .bind(content_kind_to_str(kind))
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let insert = CommentInsert::new(comment);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Relative increment on the owning content; doubles as the existence
        // check, so the insert below can never orphan a comment.
        let updated = sqlx::query(
            r#"
            UPDATE contents
            SET comment_count = comment_count + 1, updated_at = NOW()
            WHERE id = $1 AND kind = $2
            "#,
        )
        .bind(insert.content_id)
        .bind(insert.content_kind)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() == 0 {
            return Err(content_not_found(comment.content_id));
        }

        sqlx::query(
            r#"
            INSERT INTO comments (id, content_id, content_kind, author_id, text, parent_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.content_id)
        .bind(insert.content_kind)
        .bind(insert.author_id)
        .bind(insert.text)
        .bind(insert.parent_id)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_tx_error)?;

        tx.commit().await.map_err(map_tx_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
