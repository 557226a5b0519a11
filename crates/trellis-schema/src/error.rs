//! Error types for schema loading and validation
//!
//! These all signal a descriptor/implementation mismatch between the server
//! and this client and are raised fail-fast at state load, never during
//! rendering.

use thiserror::Error;

/// Schema error types.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A component type tag has no registered component
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// A resource name was requested that the state does not define
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    /// A descriptor referenced a field the resource does not define
    #[error("unknown field '{field}' in resource '{resource}'")]
    UnknownField { resource: String, field: String },

    /// A validator spec was malformed (e.g. missing its name)
    #[error("invalid validator spec: {0}")]
    InvalidValidator(String),

    /// The state JSON failed to parse
    #[error("invalid admin state: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
