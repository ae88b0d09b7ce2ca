//! Reaction handlers
//!
//! Endpoints for the like/dislike toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_core::TargetKind;
use feed_service::{ReactionService, ToggleReactionRequest};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

use super::{parse_content_kind, parse_id};

/// Toggle the caller's reaction on a content item
///
/// PUT /contents/{kind}/{content_id}/reactions/@me
pub async fn toggle_content_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((kind, content_id)): Path<(String, String)>,
    Json(request): Json<ToggleReactionRequest>,
) -> ApiResult<NoContent> {
    let kind = parse_content_kind(&kind)?;
    let content_id = parse_id(&content_id, "content_id")?;

    let service = ReactionService::new(state.service_context());
    service
        .toggle_reaction(TargetKind::from(kind), content_id, auth.user_id, request.is_like)
        .await?;
    Ok(NoContent)
}

/// Toggle the caller's like on a comment
///
/// PUT /comments/{comment_id}/reactions/@me
pub async fn toggle_comment_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<String>,
    Json(request): Json<ToggleReactionRequest>,
) -> ApiResult<NoContent> {
    let comment_id = parse_id(&comment_id, "comment_id")?;

    let service = ReactionService::new(state.service_context());
    service
        .toggle_reaction(TargetKind::Comment, comment_id, auth.user_id, request.is_like)
        .await?;
    Ok(NoContent)
}
