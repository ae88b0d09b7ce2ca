//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Content not found: {0}")]
    ContentNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Comment text is empty")]
    EmptyCommentText,

    #[error("Comment too long: max {max} characters")]
    CommentTooLong { max: usize },

    #[error("Unknown target kind: {0}")]
    InvalidTargetKind(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// The transaction lost a write race (unique index or serialization
    /// failure). Safe to retry wholesale: the toggle decision is recomputed
    /// from fresh reads.
    #[error("Write conflict: {0}")]
    WriteConflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ContentNotFound(_) => "UNKNOWN_CONTENT",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyCommentText => "EMPTY_COMMENT",
            Self::CommentTooLong { .. } => "COMMENT_TOO_LONG",
            Self::InvalidTargetKind(_) => "INVALID_TARGET_KIND",
            Self::WriteConflict(_) => "WRITE_CONFLICT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound(_) | Self::CommentNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyCommentText
                | Self::CommentTooLong { .. }
                | Self::InvalidTargetKind(_)
        )
    }

    /// Check if this is a conflict error (retryable by the caller)
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::WriteConflict(_))
    }
}

impl From<crate::entities::KindParseError> for DomainError {
    fn from(err: crate::entities::KindParseError) -> Self {
        Self::InvalidTargetKind(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::ContentNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_CONTENT");

        let err = DomainError::EmptyCommentText;
        assert_eq!(err.code(), "EMPTY_COMMENT");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ContentNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommentNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::EmptyCommentText.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyCommentText.is_validation());
        assert!(DomainError::CommentTooLong { max: 2000 }.is_validation());
        assert!(DomainError::InvalidTargetKind("post".to_string()).is_validation());
        assert!(!DomainError::WriteConflict("race".to_string()).is_validation());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::WriteConflict("unique violation".to_string()).is_conflict());
        assert!(!DomainError::DatabaseError("down".to_string()).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ContentNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Content not found: 123");

        let err = DomainError::CommentTooLong { max: 2000 };
        assert_eq!(err.to_string(), "Comment too long: max 2000 characters");
    }

    #[test]
    fn test_from_kind_parse_error() {
        let err: DomainError = "story".parse::<crate::entities::ContentKind>().unwrap_err().into();
        assert_eq!(err.code(), "INVALID_TARGET_KIND");
    }
}
