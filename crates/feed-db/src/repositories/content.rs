//! PostgreSQL implementation of ContentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Content, ContentKind, InteractionStats, TargetKind};
use feed_core::traits::{ContentRepository, PageQuery, RepoResult};
use feed_core::value_objects::Snowflake;

use crate::mappers::{content_kind_to_str, ContentInsert};
use crate::models::ContentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ContentRepository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    /// Create a new PgContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, kind: ContentKind, id: Snowflake) -> RepoResult<Option<Content>> {
        let result = sqlx::query_as::<_, ContentModel>(
            r#"
            SELECT id, kind, author_id, title, body, media_url,
                   likes, dislikes, comment_count, created_at, updated_at
            FROM contents
            WHERE id = $1 AND kind = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(content_kind_to_str(kind))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Content::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, kind: Option<ContentKind>, query: PageQuery) -> RepoResult<Vec<Content>> {
        let limit = query.limit.clamp(1, 100);
        let kind_str = kind.map(content_kind_to_str);

        let results = match (query.before, query.after) {
            (Some(before), None) => {
                // Fetch items before cursor (scrolling down the feed)
                sqlx::query_as::<_, ContentModel>(
                    r#"
                    SELECT id, kind, author_id, title, body, media_url,
                           likes, dislikes, comment_count, created_at, updated_at
                    FROM contents
                    WHERE ($1::text IS NULL OR kind = $1) AND id < $2
                    ORDER BY id DESC
                    LIMIT $3
                    "#,
                )
                .bind(kind_str)
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(after)) => {
                // Fetch items after cursor (catching up on new posts)
                sqlx::query_as::<_, ContentModel>(
                    r#"
                    SELECT id, kind, author_id, title, body, media_url,
                           likes, dislikes, comment_count, created_at, updated_at
                    FROM contents
                    WHERE ($1::text IS NULL OR kind = $1) AND id > $2
                    ORDER BY id ASC
                    LIMIT $3
                    "#,
                )
                .bind(kind_str)
                .bind(after.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                // Fetch latest items (no cursor)
                sqlx::query_as::<_, ContentModel>(
                    r#"
                    SELECT id, kind, author_id, title, body, media_url,
                           likes, dislikes, comment_count, created_at, updated_at
                    FROM contents
                    WHERE ($1::text IS NULL OR kind = $1)
                    ORDER BY id DESC
                    LIMIT $2
                    "#,
                )
                .bind(kind_str)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Content::from).collect())
    }

    #[instrument(skip(self, content))]
    async fn create(&self, content: &Content) -> RepoResult<()> {
        let insert = ContentInsert::new(content);

        sqlx::query(
            r#"
            INSERT INTO contents (id, kind, author_id, title, body, media_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(insert.id)
        .bind(insert.kind)
        .bind(insert.author_id)
        .bind(insert.title)
        .bind(insert.body)
        .bind(insert.media_url)
        .bind(content.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn stats(&self, kind: TargetKind, id: Snowflake) -> RepoResult<Option<InteractionStats>> {
        // Pure projection read; the ledger is never consulted here
        let row = match kind.content_kind() {
            Some(content_kind) => sqlx::query_as::<_, (i32, i32, i32)>(
                r#"
                SELECT likes, dislikes, comment_count
                FROM contents
                WHERE id = $1 AND kind = $2
                "#,
            )
            .bind(id.into_inner())
            .bind(content_kind_to_str(content_kind))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?,
            None => sqlx::query_as::<_, (i32,)>(
                r#"
                SELECT likes FROM comments WHERE id = $1
                "#,
            )
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?
            .map(|(likes,)| (likes, 0, 0)),
        };

        Ok(row.map(|(likes, dislikes, comments)| InteractionStats::new(likes, dislikes, comments)))
    }
}
