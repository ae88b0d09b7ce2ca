//! Redis Pub/Sub module.
//!
//! Publishes live-update events for content, comments, and reaction
//! counters. Subscribers (WebSocket bridges, edge pushers) consume these
//! channels outside this service.

mod channels;
mod publisher;

pub use channels::{PubSubChannel, FEED_CHANNEL, TARGET_CHANNEL_PREFIX, USER_CHANNEL_PREFIX};
pub use publisher::{PubSubEvent, Publisher};
