//! Domain model for action discovery and registration.
//!
//! The action domain models identifiers, registration candidates, the
//! self-registration contract, and the registry's bookkeeping. Filesystem
//! access and type metadata lookups stay outside the domain boundary.

mod candidate;
mod contract;
mod error;
mod identifier;
mod registered;
mod search_paths;
mod type_info;

#[cfg(test)]
pub(crate) use contract::MockAction;
pub use candidate::{ActionCandidate, ActionInstance};
pub use contract::{Action, ActionHookError};
pub use error::ActionDomainError;
pub use identifier::{ActionIdentifier, SEGMENT_SEPARATOR};
pub use registered::RegisteredSet;
pub use search_paths::SearchPaths;
pub(crate) use search_paths::normalise as normalise_path;
pub use type_info::{Abstractness, TypeInfo};
