//! Type metadata port.

use crate::action::domain::{ActionDomainError, ActionIdentifier, TypeInfo};
use std::sync::Arc;
use thiserror::Error;

/// Result type for type catalog operations.
pub type ReflectionResult<T> = Result<T, ReflectionError>;

/// Host type metadata used to classify registration candidates.
pub trait TypeCatalog: Send + Sync {
    /// Describes the type named by `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::UnknownType`] when the identifier does not
    /// name a loadable type, or [`ReflectionError::Catalog`] when the lookup
    /// itself fails.
    fn introspect(&self, identifier: &ActionIdentifier) -> ReflectionResult<TypeInfo>;
}

/// Errors raised while introspecting a candidate's type.
#[derive(Debug, Clone, Error)]
pub enum ReflectionError {
    /// The candidate string is not a well-formed identifier.
    #[error("malformed action identifier: {0}")]
    MalformedIdentifier(#[from] ActionDomainError),

    /// No type with this identifier is known.
    #[error("type '{0}' does not exist")]
    UnknownType(ActionIdentifier),

    /// The catalog backend failed.
    #[error("type catalog error: {0}")]
    Catalog(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReflectionError {
    /// Wraps a catalog backend error.
    pub fn catalog(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Catalog(Arc::new(err))
    }
}
