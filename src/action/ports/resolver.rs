//! Identifier resolution port.

use crate::action::domain::ActionIdentifier;
use camino::Utf8Path;

/// Maps a discovered file to the identifier of the type it defines.
pub trait IdentifierResolver: Send + Sync {
    /// Returns the identifier for `file`, or `None` when the file cannot
    /// define a type under this resolver's conventions.
    fn resolve(&self, file: &Utf8Path) -> Option<ActionIdentifier>;
}
