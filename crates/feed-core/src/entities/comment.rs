//! Comment entity - an append-only comment on a content item

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

use super::content::ContentKind;

/// Maximum comment length in characters
pub const MAX_COMMENT_LEN: usize = 2000;

/// Comment entity
///
/// Appending a comment bumps the owning content's comment_count in the same
/// transaction; comments are immutable after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub content_id: Snowflake,
    pub content_kind: ContentKind,
    pub author_id: Snowflake,
    pub text: String,
    /// Reply threading; references another comment on the same content item
    pub parent_id: Option<Snowflake>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level Comment
    pub fn new(
        id: Snowflake,
        content_id: Snowflake,
        content_kind: ContentKind,
        author_id: Snowflake,
        text: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            content_id,
            content_kind,
            author_id,
            text,
            parent_id: None,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to another comment
    pub fn new_reply(
        id: Snowflake,
        content_id: Snowflake,
        content_kind: ContentKind,
        author_id: Snowflake,
        text: String,
        parent_id: Snowflake,
    ) -> Self {
        let mut comment = Self::new(id, content_id, content_kind, author_id, text);
        comment.parent_id = Some(parent_id);
        comment
    }

    /// Check if this comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check if the text is empty after trimming
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            ContentKind::Thread,
            Snowflake::new(100),
            "nice thread".to_string(),
        );
        assert!(!comment.is_reply());
        assert!(!comment.is_empty());
        assert_eq!(comment.likes, 0);
    }

    #[test]
    fn test_comment_reply() {
        let reply = Comment::new_reply(
            Snowflake::new(2),
            Snowflake::new(10),
            ContentKind::Reel,
            Snowflake::new(100),
            "agreed".to_string(),
            Snowflake::new(1),
        );
        assert!(reply.is_reply());
        assert_eq!(reply.parent_id, Some(Snowflake::new(1)));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let comment = Comment::new(
            Snowflake::new(3),
            Snowflake::new(10),
            ContentKind::Video,
            Snowflake::new(100),
            "   \t  ".to_string(),
        );
        assert!(comment.is_empty());
    }
}
