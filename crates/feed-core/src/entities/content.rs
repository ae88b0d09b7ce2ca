//! Content entity - represents a thread, video, or reel on the board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

use super::reaction::InteractionStats;

/// Content kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Text thread
    #[default]
    Thread,
    /// Uploaded video
    Video,
    /// Short-form reel
    Reel,
}

impl ContentKind {
    /// Stable string form used in the database and in URLs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Video => "video",
            Self::Reel => "reel",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thread" => Ok(Self::Thread),
            "video" => Ok(Self::Video),
            "reel" => Ok(Self::Reel),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

/// Error when parsing a content/target kind from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown kind: {0}")]
pub struct KindParseError(pub String);

/// Content entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub id: Snowflake,
    pub kind: ContentKind,
    pub author_id: Snowflake,
    pub title: String,
    /// Thread text; None for video/reel
    pub body: Option<String>,
    /// Storage URL; None for threads
    pub media_url: Option<String>,
    pub likes: i32,
    pub dislikes: i32,
    pub comment_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// Create a new text thread with zeroed counters
    #[must_use]
    pub fn new_thread(id: Snowflake, author_id: Snowflake, title: String, body: String) -> Self {
        Self::new(id, ContentKind::Thread, author_id, title, Some(body), None)
    }

    /// Create a new video with zeroed counters
    #[must_use]
    pub fn new_video(id: Snowflake, author_id: Snowflake, title: String, media_url: String) -> Self {
        Self::new(id, ContentKind::Video, author_id, title, None, Some(media_url))
    }

    /// Create a new reel with zeroed counters
    #[must_use]
    pub fn new_reel(id: Snowflake, author_id: Snowflake, title: String, media_url: String) -> Self {
        Self::new(id, ContentKind::Reel, author_id, title, None, Some(media_url))
    }

    fn new(
        id: Snowflake,
        kind: ContentKind,
        author_id: Snowflake,
        title: String,
        body: Option<String>,
        media_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind,
            author_id,
            title,
            body,
            media_url,
            likes: 0,
            dislikes: 0,
            comment_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this content carries media (video or reel)
    #[inline]
    pub fn is_visual(&self) -> bool {
        matches!(self.kind, ContentKind::Video | ContentKind::Reel)
    }

    /// Snapshot of the projected interaction counters
    #[must_use]
    pub fn stats(&self) -> InteractionStats {
        InteractionStats {
            likes: self.likes,
            dislikes: self.dislikes,
            comments: self.comment_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [ContentKind::Thread, ContentKind::Video, ContentKind::Reel] {
            assert_eq!(kind.as_str().parse::<ContentKind>().unwrap(), kind);
        }
        assert!("story".parse::<ContentKind>().is_err());
    }

    #[test]
    fn test_new_thread() {
        let content = Content::new_thread(
            Snowflake::new(1),
            Snowflake::new(100),
            "hello".to_string(),
            "first post".to_string(),
        );
        assert_eq!(content.kind, ContentKind::Thread);
        assert!(!content.is_visual());
        assert_eq!(content.body.as_deref(), Some("first post"));
        assert!(content.media_url.is_none());
    }

    #[test]
    fn test_new_reel_is_visual() {
        let content = Content::new_reel(
            Snowflake::new(2),
            Snowflake::new(100),
            "clip".to_string(),
            "https://cdn.example.com/clip.mp4".to_string(),
        );
        assert!(content.is_visual());
        assert!(content.body.is_none());
    }

    #[test]
    fn test_counters_start_at_zero() {
        let content = Content::new_video(
            Snowflake::new(3),
            Snowflake::new(100),
            "v".to_string(),
            "https://cdn.example.com/v.mp4".to_string(),
        );
        let stats = content.stats();
        assert_eq!(stats.likes, 0);
        assert_eq!(stats.dislikes, 0);
        assert_eq!(stats.comments, 0);
    }
}
