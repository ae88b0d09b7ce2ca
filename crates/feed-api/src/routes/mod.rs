//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, comments, contents, health, reactions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(content_routes())
        .merge(comment_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/anonymous", post(auth::anonymous))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Content routes
fn content_routes() -> Router<AppState> {
    Router::new()
        // Content CRUD
        .route("/contents", post(contents::create_content))
        .route("/contents", get(contents::list_contents))
        .route("/contents/:kind/:content_id", get(contents::get_content))
        .route(
            "/contents/:kind/:content_id/stats",
            get(contents::get_content_stats),
        )
        // Reactions
        .route(
            "/contents/:kind/:content_id/reactions/@me",
            put(reactions::toggle_content_reaction),
        )
        // Comments on content
        .route(
            "/contents/:kind/:content_id/comments",
            post(comments::create_comment),
        )
        .route(
            "/contents/:kind/:content_id/comments",
            get(comments::list_comments),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/:comment_id/stats", get(comments::get_comment_stats))
        .route(
            "/comments/:comment_id/reactions/@me",
            put(reactions::toggle_comment_reaction),
        )
}
