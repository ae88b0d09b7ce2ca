//! # feed-cache
//!
//! Redis layer for live-update pub/sub.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: Publishes content/comment/reaction events after each
//!   successful commit; subscriber delivery to browsers is an external
//!   concern
//!
//! ## Example
//!
//! ```ignore
//! use feed_cache::{Publisher, PubSubChannel, PubSubEvent, RedisPool, RedisPoolConfig};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Publish event
//! let publisher = Publisher::new(pool);
//! let event = PubSubEvent::new("REACTION_UPDATED", data);
//! publisher.publish(&PubSubChannel::target(kind, id), &event).await?;
//! ```

pub mod pool;
pub mod pubsub;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export pubsub types
pub use pubsub::{
    PubSubChannel, PubSubEvent, Publisher, FEED_CHANNEL, TARGET_CHANNEL_PREFIX, USER_CHANNEL_PREFIX,
};
