//! Reaction entity <-> model mapper

use feed_core::entities::{Reaction, TargetKind};
use feed_core::value_objects::Snowflake;

use crate::models::ReactionModel;

/// Convert database target-kind string to TargetKind enum
///
/// Rows can only hold the strings the schema CHECK allows; unknown values
/// fall back to the thread kind.
pub fn parse_target_kind(kind: &str) -> TargetKind {
    kind.parse().unwrap_or(TargetKind::Thread)
}

/// Convert TargetKind enum to database string
pub fn target_kind_to_str(kind: TargetKind) -> &'static str {
    kind.as_str()
}

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            target_id: Snowflake::new(model.target_id),
            target_kind: parse_target_kind(&model.target_kind),
            user_id: Snowflake::new(model.user_id),
            is_like: model.is_like,
            created_at: model.created_at,
        }
    }
}
