//! Error handling utilities for repositories

use feed_core::error::DomainError;
use feed_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Convert a transaction error, classifying retryable races as WriteConflict.
///
/// Unique-index violations and serialization/deadlock failures (SQLSTATE
/// 40001 / 40P01) are safe to retry wholesale; everything else surfaces as a
/// plain database error.
pub fn map_tx_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::WriteConflict("concurrent reaction write".to_string());
        }
        if let Some(code) = db_err.code() {
            if code == "40001" || code == "40P01" {
                return DomainError::WriteConflict(db_err.message().to_string());
            }
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "content not found" error
pub fn content_not_found(id: Snowflake) -> DomainError {
    DomainError::ContentNotFound(id)
}

/// Create a "comment not found" error
pub fn comment_not_found(id: Snowflake) -> DomainError {
    DomainError::CommentNotFound(id)
}
