//! In-memory type catalog adapter.

use crate::action::{
    domain::{Abstractness, Action, ActionIdentifier, TypeInfo},
    ports::{ReflectionError, ReflectionResult, TypeCatalog},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory catalog of host types.
///
/// Hosts populate the catalog with every type that discovery may encounter,
/// including abstract actions and unrelated types, so that classification can
/// tell them apart. Lookups of identifiers that were never defined fail with
/// [`ReflectionError::UnknownType`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeCatalog {
    state: Arc<RwLock<HashMap<ActionIdentifier, TypeInfo>>>,
}

impl InMemoryTypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a type, replacing any earlier definition with the same
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::Catalog`] when lock acquisition fails.
    pub fn define(&self, info: TypeInfo) -> ReflectionResult<()> {
        let mut types = self
            .state
            .write()
            .map_err(|err| ReflectionError::catalog(std::io::Error::other(err.to_string())))?;
        types.insert(info.identifier().clone(), info);
        Ok(())
    }

    /// Defines a concrete action type with its registration hook.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::Catalog`] when lock acquisition fails.
    pub fn define_action(
        &self,
        identifier: ActionIdentifier,
        hook: Arc<dyn Action>,
    ) -> ReflectionResult<()> {
        self.define(TypeInfo::action(identifier, hook))
    }

    /// Defines an abstract type satisfying the action contract.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::Catalog`] when lock acquisition fails.
    pub fn define_abstract_action(&self, identifier: ActionIdentifier) -> ReflectionResult<()> {
        self.define(TypeInfo::abstract_action(identifier))
    }

    /// Defines a concrete type unrelated to the action contract.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError::Catalog`] when lock acquisition fails.
    pub fn define_plain_type(&self, identifier: ActionIdentifier) -> ReflectionResult<()> {
        self.define(TypeInfo::plain(identifier, Abstractness::Concrete))
    }
}

impl TypeCatalog for InMemoryTypeCatalog {
    fn introspect(&self, identifier: &ActionIdentifier) -> ReflectionResult<TypeInfo> {
        let types = self
            .state
            .read()
            .map_err(|err| ReflectionError::catalog(std::io::Error::other(err.to_string())))?;
        types
            .get(identifier)
            .cloned()
            .ok_or_else(|| ReflectionError::UnknownType(identifier.clone()))
    }
}
