//! Redis Pub/Sub publisher.
//!
//! Publishes events to Redis channels after successful commits. This is the
//! live-update trigger: every content creation, comment append, and reaction
//! toggle fans out through here.

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubEvent {
    /// Event type name (e.g., "REACTION_UPDATED", "COMMENT_CREATED")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel
    pub async fn publish(&self, channel: &PubSubChannel, event: &PubSubEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }

    /// Publish to multiple channels
    pub async fn publish_many(
        &self,
        channels: &[PubSubChannel],
        event: &PubSubEvent,
    ) -> RedisResult<u32> {
        let payload = event.to_json()?;
        let mut total_receivers = 0;
        let mut conn = self.pool.get().await?;

        for channel in channels {
            let channel_name = channel.name();
            let receivers: u32 = conn.publish(&channel_name, &payload).await?;
            total_receivers += receivers;
        }

        tracing::debug!(
            channels = channels.len(),
            event_type = %event.event_type,
            total_receivers = total_receivers,
            "Published event to multiple channels"
        );

        Ok(total_receivers)
    }
}

/// Convenience methods for common event types
impl Publisher {
    /// Publish a content-created event to the feed broadcast channel
    pub async fn publish_content_created(
        &self,
        content_data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new("CONTENT_CREATED", content_data);
        self.publish(&PubSubChannel::feed(), &event).await
    }

    /// Publish a comment-created event to the owning target's watchers
    pub async fn publish_comment_created(
        &self,
        target_kind: feed_core::TargetKind,
        target_id: feed_core::Snowflake,
        comment_data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new("COMMENT_CREATED", comment_data);
        let channel = PubSubChannel::target(target_kind, target_id);
        self.publish(&channel, &event).await
    }

    /// Publish fresh reaction counters to the target's watchers
    pub async fn publish_reaction_updated(
        &self,
        target_kind: feed_core::TargetKind,
        target_id: feed_core::Snowflake,
        reaction_data: serde_json::Value,
    ) -> RedisResult<u32> {
        let event = PubSubEvent::new("REACTION_UPDATED", reaction_data);
        let channel = PubSubChannel::target(target_kind, target_id);
        self.publish(&channel, &event).await
    }
}
