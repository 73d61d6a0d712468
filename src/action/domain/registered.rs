//! Insertion-ordered record of registered actions.

use super::ActionIdentifier;
use std::collections::HashSet;

/// Ordered set of identifiers whose registration hook has completed.
///
/// The set only grows; there is no unregister operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisteredSet {
    order: Vec<ActionIdentifier>,
    index: HashSet<ActionIdentifier>,
}

impl RegisteredSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an identifier, returning `false` if it was already present.
    pub fn insert(&mut self, identifier: ActionIdentifier) -> bool {
        if self.index.contains(&identifier) {
            return false;
        }
        self.index.insert(identifier.clone());
        self.order.push(identifier);
        true
    }

    /// Reports whether an identifier has been recorded.
    #[must_use]
    pub fn contains(&self, identifier: &ActionIdentifier) -> bool {
        self.index.contains(identifier)
    }

    /// Returns the number of recorded identifiers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Reports whether nothing has been recorded yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ActionIdentifier> {
        self.order.iter()
    }

    /// Returns an owned, insertion-ordered copy of the recorded identifiers.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ActionIdentifier> {
        self.order.clone()
    }
}
