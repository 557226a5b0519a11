//! Error types for permission path handling
//!
//! Permission evaluation itself is infallible (unknown paths simply deny);
//! errors only arise when parsing malformed path strings.

use thiserror::Error;

/// Permission error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// Path string was empty
    #[error("empty permission path")]
    EmptyPath,

    /// Path did not have 2 or 3 dot-separated segments
    #[error("invalid permission path '{0}': expected 'resource.action' or 'resource.field.action'")]
    InvalidPath(String),

    /// Path contained an empty segment (e.g. "orders..view")
    #[error("empty segment in permission path '{0}'")]
    EmptySegment(String),
}

/// Result type for permission operations.
pub type PermissionResult<T> = Result<T, PermissionError>;
