//! Comment handlers
//!
//! Endpoints for the append-only comment log.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_core::TargetKind;
use feed_service::{
    CommentResponse, CommentService, ContentService, CreateCommentRequest,
    InteractionStatsResponse,
};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::{parse_content_kind, parse_id};

/// Append a comment to a content item
///
/// POST /contents/{kind}/{content_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((kind, content_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let kind = parse_content_kind(&kind)?;
    let content_id = parse_id(&content_id, "content_id")?;

    let service = CommentService::new(state.service_context());
    let response = service
        .add_comment(kind, content_id, auth.user_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List comments on a content item, oldest first
///
/// GET /contents/{kind}/{content_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path((kind, content_id)): Path<(String, String)>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let kind = parse_content_kind(&kind)?;
    let content_id = parse_id(&content_id, "content_id")?;

    let service = CommentService::new(state.service_context());
    let comments = service
        .list_comments(kind, content_id, pagination.to_page_query())
        .await?;
    Ok(Json(comments))
}

/// Get the projected like counter for a comment
///
/// GET /comments/{comment_id}/stats
pub async fn get_comment_stats(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<InteractionStatsResponse>> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = ContentService::new(state.service_context());
    let stats = service
        .get_interaction_stats(TargetKind::Comment, comment_id)
        .await?;
    Ok(Json(stats))
}
