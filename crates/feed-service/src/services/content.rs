//! Content service
//!
//! Handles content creation, feed listing, and projection reads.

use feed_core::entities::{Content, ContentKind, TargetKind};
use feed_core::traits::PageQuery;
use feed_core::Snowflake;
use serde_json::json;
use tracing::{info, instrument};

use crate::dto::{ContentResponse, CreateContentRequest, InteractionStatsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    /// Create a new ContentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new content item
    #[instrument(skip(self, request))]
    pub async fn create_content(
        &self,
        author_id: Snowflake,
        request: CreateContentRequest,
    ) -> ServiceResult<ContentResponse> {
        if author_id.is_zero() {
            return Err(feed_common::AppError::AuthenticationRequired.into());
        }

        let kind: ContentKind = request
            .kind
            .parse()
            .map_err(|_| ServiceError::validation(format!("unknown content kind: {}", request.kind)))?;

        let id = self.ctx.generate_id();
        let content = match kind {
            ContentKind::Thread => {
                let body = request
                    .body
                    .as_deref()
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .ok_or_else(|| ServiceError::validation("threads require a non-empty body"))?;
                Content::new_thread(id, author_id, request.title, body.to_string())
            }
            ContentKind::Video | ContentKind::Reel => {
                let media_url = request
                    .media_url
                    .clone()
                    .filter(|u| !u.is_empty())
                    .ok_or_else(|| ServiceError::validation("videos and reels require a media_url"))?;
                if kind == ContentKind::Video {
                    Content::new_video(id, author_id, request.title, media_url)
                } else {
                    Content::new_reel(id, author_id, request.title, media_url)
                }
            }
        };

        self.ctx.content_repo().create(&content).await?;

        info!(content_id = %content.id, kind = %content.kind, "Content created");

        // Live-update trigger; delivery is best effort
        self.ctx
            .publisher()
            .publish_content_created(json!({
                "content_id": content.id.to_string(),
                "kind": content.kind.as_str(),
                "author_id": content.author_id.to_string(),
                "title": content.title.clone(),
            }))
            .await
            .ok();

        Ok(ContentResponse::from(content))
    }

    /// Get a content item by kind and ID
    #[instrument(skip(self))]
    pub async fn get_content(&self, kind: ContentKind, id: Snowflake) -> ServiceResult<ContentResponse> {
        let content = self
            .ctx
            .content_repo()
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Content", id.to_string()))?;

        Ok(ContentResponse::from(content))
    }

    /// List content items, newest first
    #[instrument(skip(self))]
    pub async fn list_contents(
        &self,
        kind: Option<ContentKind>,
        query: PageQuery,
    ) -> ServiceResult<Vec<ContentResponse>> {
        let contents = self.ctx.content_repo().list(kind, query).await?;
        Ok(contents.iter().map(ContentResponse::from).collect())
    }

    /// Read the projected interaction counters for a target.
    ///
    /// The projection is authoritative between transactions; the ledger is
    /// never consulted on this path.
    #[instrument(skip(self))]
    pub async fn get_interaction_stats(
        &self,
        target_kind: TargetKind,
        target_id: Snowflake,
    ) -> ServiceResult<InteractionStatsResponse> {
        let stats = self
            .ctx
            .content_repo()
            .stats(target_kind, target_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Content", target_id.to_string()))?;

        Ok(InteractionStatsResponse::from(stats))
    }
}
