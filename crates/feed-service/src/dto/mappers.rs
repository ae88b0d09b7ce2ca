//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use feed_core::entities::{Comment, Content, InteractionStats};

use super::responses::{CommentResponse, ContentResponse, InteractionStatsResponse};

// ============================================================================
// Content Mappers
// ============================================================================

impl From<&Content> for ContentResponse {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id.to_string(),
            kind: content.kind.as_str().to_string(),
            author_id: content.author_id.to_string(),
            title: content.title.clone(),
            body: content.body.clone(),
            media_url: content.media_url.clone(),
            likes: content.likes,
            dislikes: content.dislikes,
            comment_count: content.comment_count,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

impl From<Content> for ContentResponse {
    fn from(content: Content) -> Self {
        Self::from(&content)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            content_id: comment.content_id.to_string(),
            content_kind: comment.content_kind.as_str().to_string(),
            author_id: comment.author_id.to_string(),
            text: comment.text.clone(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            likes: comment.likes,
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Interaction Mappers
// ============================================================================

impl From<InteractionStats> for InteractionStatsResponse {
    fn from(stats: InteractionStats) -> Self {
        Self {
            likes: stats.likes,
            dislikes: stats.dislikes,
            comments: stats.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::{ContentKind, Snowflake};

    #[test]
    fn test_content_response_mapping() {
        let content = Content::new_thread(
            Snowflake::new(1),
            Snowflake::new(100),
            "hello".to_string(),
            "body".to_string(),
        );
        let response = ContentResponse::from(&content);

        assert_eq!(response.id, "1");
        assert_eq!(response.kind, "thread");
        assert_eq!(response.author_id, "100");
        assert_eq!(response.comment_count, 0);
    }

    #[test]
    fn test_comment_response_mapping() {
        let comment = Comment::new_reply(
            Snowflake::new(2),
            Snowflake::new(10),
            ContentKind::Video,
            Snowflake::new(100),
            "hi".to_string(),
            Snowflake::new(1),
        );
        let response = CommentResponse::from(&comment);

        assert_eq!(response.content_kind, "video");
        assert_eq!(response.parent_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_stats_mapping() {
        let response = InteractionStatsResponse::from(InteractionStats::new(1, 2, 3));
        assert_eq!(response.likes, 1);
        assert_eq!(response.dislikes, 2);
        assert_eq!(response.comments, 3);
    }
}
