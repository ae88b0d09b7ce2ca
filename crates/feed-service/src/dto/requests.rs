//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; inputs with shape constraints
//! also implement `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Content Requests
// ============================================================================

/// Create content request
///
/// `kind` selects the variant: threads require `body`, videos and reels
/// require `media_url`. The kind-specific checks live in the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContentRequest {
    /// Content kind: "thread", "video", or "reel"
    pub kind: String,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 10000, message = "Body must be at most 10000 characters"))]
    pub body: Option<String>,

    #[validate(length(min = 1, max = 2048, message = "media_url must be 1-2048 characters"))]
    pub media_url: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
///
/// Emptiness is judged after trimming, so the whitespace check lives in the
/// service rather than in a length rule.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub text: String,

    /// Optional parent comment (reply threading), Snowflake as string
    pub parent_comment_id: Option<String>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle reaction request
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleReactionRequest {
    /// true = like, false = dislike
    pub is_like: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_content_title_validation() {
        let request = CreateContentRequest {
            kind: "thread".to_string(),
            title: String::new(),
            body: Some("text".to_string()),
            media_url: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_comment_length_validation() {
        let request = CreateCommentRequest {
            text: "x".repeat(2001),
            parent_comment_id: None,
        };
        assert!(request.validate().is_err());

        let request = CreateCommentRequest {
            text: "ok".to_string(),
            parent_comment_id: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_toggle_reaction_deserializes() {
        let request: ToggleReactionRequest = serde_json::from_str("{\"is_like\": false}").unwrap();
        assert!(!request.is_like);
    }
}
