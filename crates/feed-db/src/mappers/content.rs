//! Content entity <-> model mapper

use feed_core::entities::{Content, ContentKind};
use feed_core::value_objects::Snowflake;

use crate::models::ContentModel;

/// Convert database kind string to ContentKind enum
///
/// Rows can only hold the strings the schema CHECK allows; unknown values
/// fall back to the default kind.
pub fn parse_content_kind(kind: &str) -> ContentKind {
    kind.parse().unwrap_or_default()
}

/// Convert ContentKind enum to database string
pub fn content_kind_to_str(kind: ContentKind) -> &'static str {
    kind.as_str()
}

/// Convert ContentModel to Content entity
impl From<ContentModel> for Content {
    fn from(model: ContentModel) -> Self {
        Content {
            id: Snowflake::new(model.id),
            kind: parse_content_kind(&model.kind),
            author_id: Snowflake::new(model.author_id),
            title: model.title,
            body: model.body,
            media_url: model.media_url,
            likes: model.likes,
            dislikes: model.dislikes,
            comment_count: model.comment_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert Content entity reference to values for database insertion
pub struct ContentInsert<'a> {
    pub id: i64,
    pub kind: &'static str,
    pub author_id: i64,
    pub title: &'a str,
    pub body: Option<&'a str>,
    pub media_url: Option<&'a str>,
}

impl<'a> ContentInsert<'a> {
    pub fn new(content: &'a Content) -> Self {
        Self {
            id: content.id.into_inner(),
            kind: content_kind_to_str(content.kind),
            author_id: content.author_id.into_inner(),
            title: &content.title,
            body: content.body.as_deref(),
            media_url: content.media_url.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_kind() {
        assert_eq!(parse_content_kind("video"), ContentKind::Video);
        assert_eq!(parse_content_kind("bogus"), ContentKind::Thread);
    }
}
