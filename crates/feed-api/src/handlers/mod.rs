//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod comments;
pub mod contents;
pub mod health;
pub mod reactions;

use feed_core::{ContentKind, Snowflake};

use crate::response::ApiError;

/// Parse a Snowflake path segment
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {what} format")))
}

/// Parse a content-kind path segment
pub(crate) fn parse_content_kind(raw: &str) -> Result<ContentKind, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Unknown content kind: {raw}")))
}
