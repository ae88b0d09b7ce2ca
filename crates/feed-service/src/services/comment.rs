//! Comment service
//!
//! Handles the append-only comment log: validation, the transactional
//! append-with-counter, and listing.

use feed_core::entities::{Comment, ContentKind, TargetKind, MAX_COMMENT_LEN};
use feed_core::traits::PageQuery;
use feed_core::{DomainError, Snowflake};
use serde_json::json;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a comment to a content item.
    ///
    /// The comment row and the owning item's comment_count increment commit
    /// in one transaction; there is no decrement path (deletion is not
    /// modeled).
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        content_kind: ContentKind,
        content_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if author_id.is_zero() {
            return Err(feed_common::AppError::AuthenticationRequired.into());
        }

        let text = request.text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyCommentText.into());
        }
        if text.chars().count() > MAX_COMMENT_LEN {
            return Err(DomainError::CommentTooLong { max: MAX_COMMENT_LEN }.into());
        }

        let parent_id = match request.parent_comment_id.as_deref() {
            Some(raw) => {
                let parent_id = raw
                    .parse::<Snowflake>()
                    .map_err(|_| ServiceError::validation("Invalid parent_comment_id format"))?;

                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Comment", parent_id.to_string()))?;

                if parent.content_id != content_id || parent.content_kind != content_kind {
                    return Err(ServiceError::validation(
                        "Parent comment must belong to the same content item",
                    ));
                }

                Some(parent_id)
            }
            None => None,
        };

        let id = self.ctx.generate_id();
        let comment = match parent_id {
            Some(parent_id) => Comment::new_reply(
                id,
                content_id,
                content_kind,
                author_id,
                text.to_string(),
                parent_id,
            ),
            None => Comment::new(id, content_id, content_kind, author_id, text.to_string()),
        };

        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            content_id = %content_id,
            content_kind = %content_kind,
            "Comment appended"
        );

        // Live-update trigger; delivery is best effort
        self.ctx
            .publisher()
            .publish_comment_created(
                TargetKind::from(content_kind),
                content_id,
                json!({
                    "comment_id": comment.id.to_string(),
                    "content_id": content_id.to_string(),
                    "content_kind": content_kind.as_str(),
                    "author_id": author_id.to_string(),
                    "text": comment.text.clone(),
                    "parent_id": comment.parent_id.map(|id| id.to_string()),
                }),
            )
            .await
            .ok();

        Ok(CommentResponse::from(comment))
    }

    /// Get a comment by ID
    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: Snowflake) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", id.to_string()))?;

        Ok(CommentResponse::from(comment))
    }

    /// List comments on a content item, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        content_kind: ContentKind,
        content_id: Snowflake,
        query: PageQuery,
    ) -> ServiceResult<Vec<CommentResponse>> {
        // Listing against a missing item is a 404, not an empty page
        self.ctx
            .content_repo()
            .find_by_id(content_kind, content_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Content", content_id.to_string()))?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_content(content_kind, content_id, query)
            .await?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }
}
