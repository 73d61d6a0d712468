//! Error types for action domain validation.

use thiserror::Error;

/// Errors returned while constructing action domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionDomainError {
    /// The identifier is empty.
    #[error("action identifier must not be empty")]
    EmptyIdentifier,

    /// The identifier contains an empty segment, e.g. `app::::Foo`.
    #[error("action identifier '{0}' contains an empty segment")]
    EmptySegment(String),

    /// A segment is not of the form `[A-Za-z_][A-Za-z0-9_]*`.
    #[error("action identifier '{identifier}' has invalid segment '{segment}'")]
    InvalidSegment {
        /// The full identifier as supplied.
        identifier: String,
        /// The offending segment.
        segment: String,
    },
}
