//! Comment entity <-> model mapper

use feed_core::entities::Comment;
use feed_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::content::{content_kind_to_str, parse_content_kind};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            content_id: Snowflake::new(model.content_id),
            content_kind: parse_content_kind(&model.content_kind),
            author_id: Snowflake::new(model.author_id),
            text: model.text,
            parent_id: model.parent_id.map(Snowflake::new),
            likes: model.likes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Comment entity reference to values for database insertion
pub struct CommentInsert<'a> {
    pub id: i64,
    pub content_id: i64,
    pub content_kind: &'static str,
    pub author_id: i64,
    pub text: &'a str,
    pub parent_id: Option<i64>,
}

impl<'a> CommentInsert<'a> {
    pub fn new(comment: &'a Comment) -> Self {
        Self {
            id: comment.id.into_inner(),
            content_id: comment.content_id.into_inner(),
            content_kind: content_kind_to_str(comment.content_kind),
            author_id: comment.author_id.into_inner(),
            text: &comment.text,
            parent_id: comment.parent_id.map(Snowflake::into_inner),
        }
    }
}
