//! Registration candidates: a raw identifier, a validated one, or a live
//! instance.

use super::{ActionDomainError, ActionIdentifier};
use std::fmt;

/// A live value that can report the identifier of its runtime type.
pub trait ActionInstance {
    /// Returns the fully-qualified identifier of this value's type.
    fn action_identifier(&self) -> ActionIdentifier;
}

/// Something the registry may be asked to register.
///
/// Candidates only live for the duration of a single registry call.
#[derive(Clone, Copy)]
pub enum ActionCandidate<'a> {
    /// An identifier string that has not been validated yet.
    Name(&'a str),
    /// An already-validated identifier.
    Identifier(&'a ActionIdentifier),
    /// A live instance; its runtime type identifier is used.
    Instance(&'a dyn ActionInstance),
}

impl<'a> ActionCandidate<'a> {
    /// Wraps a live instance.
    #[must_use]
    pub fn instance<T: ActionInstance>(value: &'a T) -> Self {
        Self::Instance(value)
    }

    /// Resolves the candidate to its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDomainError`] when a [`ActionCandidate::Name`] is not a
    /// well-formed identifier.
    pub fn resolve(&self) -> Result<ActionIdentifier, ActionDomainError> {
        match self {
            Self::Name(name) => ActionIdentifier::new(*name),
            Self::Identifier(identifier) => Ok((*identifier).clone()),
            Self::Instance(instance) => Ok(instance.action_identifier()),
        }
    }
}

impl fmt::Debug for ActionCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Identifier(identifier) => {
                f.debug_tuple("Identifier").field(identifier).finish()
            }
            Self::Instance(instance) => f
                .debug_tuple("Instance")
                .field(&instance.action_identifier())
                .finish(),
        }
    }
}

impl<'a> From<&'a str> for ActionCandidate<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for ActionCandidate<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl<'a> From<&'a ActionIdentifier> for ActionCandidate<'a> {
    fn from(identifier: &'a ActionIdentifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl<'a> From<&'a dyn ActionInstance> for ActionCandidate<'a> {
    fn from(instance: &'a dyn ActionInstance) -> Self {
        Self::Instance(instance)
    }
}
