//! Content database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for contents table
#[derive(Debug, Clone, FromRow)]
pub struct ContentModel {
    pub id: i64,
    /// Content kind: 'thread', 'video', 'reel' (stored as text)
    pub kind: String,
    pub author_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub media_url: Option<String>,
    pub likes: i32,
    pub dislikes: i32,
    pub comment_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentModel {
    /// Check if this row carries media
    #[inline]
    pub fn is_visual(&self) -> bool {
        self.kind == "video" || self.kind == "reel"
    }
}
