//! Content handlers
//!
//! Endpoints for creating and reading content items and their interaction
//! counters.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use feed_core::{ContentKind, TargetKind};
use feed_service::{
    ContentResponse, ContentService, CreateContentRequest, InteractionStatsResponse,
};
use serde::Deserialize;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

use super::{parse_content_kind, parse_id};

/// Create a content item
///
/// POST /contents
pub async fn create_content(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateContentRequest>,
) -> ApiResult<Created<Json<ContentResponse>>> {
    let service = ContentService::new(state.service_context());
    let response = service.create_content(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Feed listing query parameters
#[derive(Debug, Deserialize)]
pub struct ListContentsParams {
    /// Optional kind filter: "thread", "video", "reel"
    pub kind: Option<String>,
}

/// List content items, newest first
///
/// GET /contents?kind=&before=&after=&limit=
pub async fn list_contents(
    State(state): State<AppState>,
    Query(params): Query<ListContentsParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ContentResponse>>> {
    let kind: Option<ContentKind> = params
        .kind
        .as_deref()
        .map(|raw| {
            raw.parse()
                .map_err(|_| ApiError::invalid_query(format!("Unknown content kind: {raw}")))
        })
        .transpose()?;

    let service = ContentService::new(state.service_context());
    let contents = service
        .list_contents(kind, pagination.to_page_query())
        .await?;
    Ok(Json(contents))
}

/// Get a content item
///
/// GET /contents/{kind}/{content_id}
pub async fn get_content(
    State(state): State<AppState>,
    Path((kind, content_id)): Path<(String, String)>,
) -> ApiResult<Json<ContentResponse>> {
    let kind = parse_content_kind(&kind)?;
    let content_id = parse_id(&content_id, "content_id")?;

    let service = ContentService::new(state.service_context());
    let response = service.get_content(kind, content_id).await?;
    Ok(Json(response))
}

/// Get the projected interaction counters for a content item
///
/// GET /contents/{kind}/{content_id}/stats
pub async fn get_content_stats(
    State(state): State<AppState>,
    Path((kind, content_id)): Path<(String, String)>,
) -> ApiResult<Json<InteractionStatsResponse>> {
    let kind = parse_content_kind(&kind)?;
    let content_id = parse_id(&content_id, "content_id")?;

    let service = ContentService::new(state.service_context());
    let stats = service
        .get_interaction_stats(TargetKind::from(kind), content_id)
        .await?;
    Ok(Json(stats))
}
