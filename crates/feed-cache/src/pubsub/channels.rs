//! Pub/Sub channel definitions.
//!
//! Defines the channel naming conventions for Redis Pub/Sub.

use feed_core::{Snowflake, TargetKind};

/// Channel prefix for per-target events (content items and comments)
pub const TARGET_CHANNEL_PREFIX: &str = "target:";
/// Channel prefix for user-specific events
pub const USER_CHANNEL_PREFIX: &str = "user:";
/// Channel for feed-wide events (all connected clients)
pub const FEED_CHANNEL: &str = "feed";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Events for a specific target (watchers of one content item or comment)
    Target(TargetKind, Snowflake),
    /// Events for a specific user (all their sessions)
    User(Snowflake),
    /// Feed-wide broadcast (new content)
    Feed,
    /// Custom channel name
    Custom(String),
}

impl PubSubChannel {
    /// Create a target channel
    #[must_use]
    pub fn target(kind: TargetKind, id: Snowflake) -> Self {
        Self::Target(kind, id)
    }

    /// Create a user channel
    #[must_use]
    pub fn user(user_id: Snowflake) -> Self {
        Self::User(user_id)
    }

    /// Create the feed broadcast channel
    #[must_use]
    pub fn feed() -> Self {
        Self::Feed
    }

    /// Create a custom channel
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Target(kind, id) => format!("{TARGET_CHANNEL_PREFIX}{kind}:{id}"),
            Self::User(id) => format!("{USER_CHANNEL_PREFIX}{id}"),
            Self::Feed => FEED_CHANNEL.to_string(),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == FEED_CHANNEL {
            return Self::Feed;
        }

        if let Some(rest) = name.strip_prefix(TARGET_CHANNEL_PREFIX) {
            if let Some((kind_str, id_str)) = rest.split_once(':') {
                if let (Ok(kind), Ok(id)) = (kind_str.parse::<TargetKind>(), id_str.parse::<i64>())
                {
                    return Self::Target(kind, Snowflake::from(id));
                }
            }
        }

        if let Some(id_str) = name.strip_prefix(USER_CHANNEL_PREFIX) {
            if let Ok(id) = id_str.parse::<i64>() {
                return Self::User(Snowflake::from(id));
            }
        }

        Self::Custom(name.to_string())
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        let target_id = Snowflake::from(12345i64);
        let user_id = Snowflake::from(11111i64);

        assert_eq!(
            PubSubChannel::target(TargetKind::Reel, target_id).name(),
            "target:reel:12345"
        );
        assert_eq!(PubSubChannel::user(user_id).name(), "user:11111");
        assert_eq!(PubSubChannel::feed().name(), "feed");
        assert_eq!(PubSubChannel::custom("test").name(), "test");
    }

    #[test]
    fn test_channel_parse() {
        let target = PubSubChannel::parse("target:comment:67890");
        assert_eq!(
            target,
            PubSubChannel::Target(TargetKind::Comment, Snowflake::from(67890i64))
        );

        let user = PubSubChannel::parse("user:11111");
        assert_eq!(user, PubSubChannel::User(Snowflake::from(11111i64)));

        assert_eq!(PubSubChannel::parse("feed"), PubSubChannel::Feed);

        let custom = PubSubChannel::parse("unknown:123");
        assert_eq!(custom, PubSubChannel::Custom("unknown:123".to_string()));
    }

    #[test]
    fn test_round_trip() {
        let channel = PubSubChannel::target(TargetKind::Video, Snowflake::from(42i64));
        assert_eq!(PubSubChannel::parse(&channel.name()), channel);
    }
}
