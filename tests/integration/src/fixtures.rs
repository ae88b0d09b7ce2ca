//! Test fixtures and data generators
//!
//! Provides reusable test data and wire-shape structs for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Create content request
#[derive(Debug, Serialize)]
pub struct CreateContentRequest {
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl CreateContentRequest {
    /// A unique text thread
    pub fn thread() -> Self {
        let suffix = unique_suffix();
        Self {
            kind: "thread".to_string(),
            title: format!("Test thread {suffix}"),
            body: Some(format!("thread body {suffix}")),
            media_url: None,
        }
    }

    /// A unique reel
    pub fn reel() -> Self {
        let suffix = unique_suffix();
        Self {
            kind: "reel".to_string(),
            title: format!("Test reel {suffix}"),
            body: None,
            media_url: Some(format!("https://cdn.example.com/reel-{suffix}.mp4")),
        }
    }
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

impl CreateCommentRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parent_comment_id: None,
        }
    }
}

/// Toggle reaction request
#[derive(Debug, Serialize)]
pub struct ToggleReactionRequest {
    pub is_like: bool,
}

// ============================================================================
// Responses
// ============================================================================

/// Anonymous session response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Content response
#[derive(Debug, Deserialize)]
pub struct ContentResponse {
    pub id: String,
    pub kind: String,
    pub author_id: String,
    pub title: String,
    pub likes: i32,
    pub dislikes: i32,
    pub comment_count: i32,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub content_id: String,
    pub content_kind: String,
    pub author_id: String,
    pub text: String,
    pub likes: i32,
}

/// Interaction stats response
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct StatsResponse {
    pub likes: i32,
    pub dislikes: i32,
    pub comments: i32,
}
