//! Domain events - events emitted when domain state changes
//!
//! These events are used for:
//! - Notifying live-update subscribers of new content, comments, and counters
//! - Triggering side effects (e.g., cache invalidation)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ContentKind, InteractionStats, TargetKind};
use crate::value_objects::Snowflake;

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    ContentCreated(ContentCreatedEvent),
    CommentCreated(CommentCreatedEvent),
    ReactionUpdated(ReactionUpdatedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ContentCreated(_) => "CONTENT_CREATED",
            Self::CommentCreated(_) => "COMMENT_CREATED",
            Self::ReactionUpdated(_) => "REACTION_UPDATED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ContentCreated(e) => e.at,
            Self::CommentCreated(e) => e.at,
            Self::ReactionUpdated(e) => e.at,
        }
    }
}

/// A content item was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCreatedEvent {
    pub content_id: Snowflake,
    pub kind: ContentKind,
    pub author_id: Snowflake,
    pub at: DateTime<Utc>,
}

/// A comment was appended to a content item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreatedEvent {
    pub comment_id: Snowflake,
    pub content_id: Snowflake,
    pub content_kind: ContentKind,
    pub author_id: Snowflake,
    pub at: DateTime<Utc>,
}

/// A reaction toggle committed; carries the fresh projected counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionUpdatedEvent {
    pub target_id: Snowflake,
    pub target_kind: TargetKind,
    pub user_id: Snowflake,
    /// The reaction the user now holds, if any
    pub current: Option<bool>,
    pub stats: InteractionStats,
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        let event = DomainEvent::ReactionUpdated(ReactionUpdatedEvent {
            target_id: Snowflake::new(1),
            target_kind: TargetKind::Thread,
            user_id: Snowflake::new(100),
            current: Some(true),
            stats: InteractionStats::new(1, 0, 0),
            at: Utc::now(),
        });
        assert_eq!(event.event_type(), "REACTION_UPDATED");
    }

    #[test]
    fn test_event_serialization_tag() {
        let event = DomainEvent::ContentCreated(ContentCreatedEvent {
            content_id: Snowflake::new(5),
            kind: ContentKind::Reel,
            author_id: Snowflake::new(100),
            at: Utc::now(),
        });
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"CONTENT_CREATED\""));
        assert!(json.contains("\"reel\""));
    }
}
