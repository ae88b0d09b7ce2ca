//! Reaction entity - one like/dislike per user per target
//!
//! The set of reaction rows is the ledger the projected counters on
//! contents/comments are derived from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

use super::content::{ContentKind, KindParseError};

/// What a reaction can attach to: any content kind, or a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Thread,
    Video,
    Reel,
    Comment,
}

impl TargetKind {
    /// Stable string form used in the database and in URLs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thread => "thread",
            Self::Video => "video",
            Self::Reel => "reel",
            Self::Comment => "comment",
        }
    }

    /// Check if the target is a content item (not a comment)
    #[inline]
    pub const fn is_content(self) -> bool {
        !matches!(self, Self::Comment)
    }

    /// The content kind this target maps to, if it is one
    #[must_use]
    pub const fn content_kind(self) -> Option<ContentKind> {
        match self {
            Self::Thread => Some(ContentKind::Thread),
            Self::Video => Some(ContentKind::Video),
            Self::Reel => Some(ContentKind::Reel),
            Self::Comment => None,
        }
    }
}

impl From<ContentKind> for TargetKind {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Thread => Self::Thread,
            ContentKind::Video => Self::Video,
            ContentKind::Reel => Self::Reel,
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thread" => Ok(Self::Thread),
            "video" => Ok(Self::Video),
            "reel" => Ok(Self::Reel),
            "comment" => Ok(Self::Comment),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

/// Reaction ledger row
///
/// At most one row exists per (target_id, target_kind, user_id). Rows are
/// created and deleted by the toggle protocol, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub target_id: Snowflake,
    pub target_kind: TargetKind,
    pub user_id: Snowflake,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(target_id: Snowflake, target_kind: TargetKind, user_id: Snowflake, is_like: bool) -> Self {
        Self {
            target_id,
            target_kind,
            user_id,
            is_like,
            created_at: Utc::now(),
        }
    }

    /// Check if this is a dislike
    #[inline]
    pub fn is_dislike(&self) -> bool {
        !self.is_like
    }
}

/// What a reaction toggle did to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// New reaction recorded where none existed
    Set { is_like: bool },
    /// Same reaction requested again; the row was removed
    Cleared { was_like: bool },
    /// Opposite reaction replaced the existing row
    Switched { is_like: bool },
}

impl ToggleOutcome {
    /// Whether a ledger row exists for the tuple after the toggle
    #[inline]
    pub fn holds_reaction(&self) -> bool {
        !matches!(self, Self::Cleared { .. })
    }

    /// The reaction now held, if any
    #[must_use]
    pub fn current(&self) -> Option<bool> {
        match self {
            Self::Set { is_like } | Self::Switched { is_like } => Some(*is_like),
            Self::Cleared { .. } => None,
        }
    }
}

/// Projected interaction counters read off a content item or comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InteractionStats {
    pub likes: i32,
    pub dislikes: i32,
    pub comments: i32,
}

impl InteractionStats {
    /// Create a new InteractionStats
    #[must_use]
    pub fn new(likes: i32, dislikes: i32, comments: i32) -> Self {
        Self {
            likes,
            dislikes,
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_creation() {
        let reaction = Reaction::new(
            Snowflake::new(1),
            TargetKind::Video,
            Snowflake::new(100),
            true,
        );
        assert_eq!(reaction.target_id, Snowflake::new(1));
        assert_eq!(reaction.user_id, Snowflake::new(100));
        assert!(!reaction.is_dislike());
    }

    #[test]
    fn test_target_kind_round_trip() {
        for kind in [
            TargetKind::Thread,
            TargetKind::Video,
            TargetKind::Reel,
            TargetKind::Comment,
        ] {
            assert_eq!(kind.as_str().parse::<TargetKind>().unwrap(), kind);
        }
        assert!("post".parse::<TargetKind>().is_err());
    }

    #[test]
    fn test_target_kind_content_mapping() {
        assert_eq!(TargetKind::Reel.content_kind(), Some(ContentKind::Reel));
        assert_eq!(TargetKind::Comment.content_kind(), None);
        assert_eq!(TargetKind::from(ContentKind::Video), TargetKind::Video);
        assert!(!TargetKind::Comment.is_content());
    }

    #[test]
    fn test_toggle_outcome_current() {
        assert_eq!(ToggleOutcome::Set { is_like: true }.current(), Some(true));
        assert_eq!(ToggleOutcome::Switched { is_like: false }.current(), Some(false));
        assert_eq!(ToggleOutcome::Cleared { was_like: true }.current(), None);
        assert!(!ToggleOutcome::Cleared { was_like: false }.holds_reaction());
    }

    #[test]
    fn test_interaction_stats() {
        let stats = InteractionStats::new(3, 1, 7);
        assert_eq!(stats.likes, 3);
        assert_eq!(stats.dislikes, 1);
        assert_eq!(stats.comments, 7);
    }
}
