//! Type metadata reported by a type catalog.

use super::{Action, ActionIdentifier};
use std::fmt;
use std::sync::Arc;

/// Whether a type can be used directly or only through its subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abstractness {
    /// The type can be used directly.
    Concrete,
    /// The type only exists to be specialised.
    Abstract,
}

/// Metadata describing a single type known to the host.
///
/// A type is registrable only when it is concrete and satisfies the
/// [`Action`] contract; the constructors guarantee that a hook is present in
/// exactly that case.
#[derive(Clone)]
pub struct TypeInfo {
    identifier: ActionIdentifier,
    abstractness: Abstractness,
    implements_action: bool,
    hook: Option<Arc<dyn Action>>,
}

impl TypeInfo {
    /// Describes a concrete action type with its registration hook.
    #[must_use]
    pub fn action(identifier: ActionIdentifier, hook: Arc<dyn Action>) -> Self {
        Self {
            identifier,
            abstractness: Abstractness::Concrete,
            implements_action: true,
            hook: Some(hook),
        }
    }

    /// Describes an abstract type satisfying the action contract.
    #[must_use]
    pub const fn abstract_action(identifier: ActionIdentifier) -> Self {
        Self {
            identifier,
            abstractness: Abstractness::Abstract,
            implements_action: true,
            hook: None,
        }
    }

    /// Describes a type unrelated to the action contract.
    #[must_use]
    pub const fn plain(identifier: ActionIdentifier, abstractness: Abstractness) -> Self {
        Self {
            identifier,
            abstractness,
            implements_action: false,
            hook: None,
        }
    }

    /// Returns the type's identifier.
    #[must_use]
    pub const fn identifier(&self) -> &ActionIdentifier {
        &self.identifier
    }

    /// Returns the type's abstractness.
    #[must_use]
    pub const fn abstractness(&self) -> Abstractness {
        self.abstractness
    }

    /// Reports whether the type is abstract.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        matches!(self.abstractness, Abstractness::Abstract)
    }

    /// Reports whether the type satisfies the action contract, abstract or
    /// not.
    #[must_use]
    pub const fn implements_action(&self) -> bool {
        self.implements_action
    }

    /// Returns the registration hook of a concrete action type.
    #[must_use]
    pub fn registration_hook(&self) -> Option<&Arc<dyn Action>> {
        if self.is_abstract() || !self.implements_action {
            return None;
        }
        self.hook.as_ref()
    }

    /// Reports whether the type is a concrete action.
    #[must_use]
    pub fn is_concrete_action(&self) -> bool {
        self.registration_hook().is_some()
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("identifier", &self.identifier)
            .field("abstractness", &self.abstractness)
            .field("implements_action", &self.implements_action)
            .field("has_hook", &self.hook.is_some())
            .finish()
    }
}
