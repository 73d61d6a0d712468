//! Port contracts for action discovery.
//!
//! Ports define infrastructure-agnostic interfaces for the collaborators the
//! registry drives: host type metadata, file enumeration, and identifier
//! resolution.

mod catalog;
mod enumerator;
mod resolver;

#[cfg(test)]
pub(crate) use enumerator::MockFileEnumerator;
pub use catalog::{ReflectionError, ReflectionResult, TypeCatalog};
pub use enumerator::{DiscoveryError, DiscoveryResult, FileEnumerator};
pub use resolver::IdentifierResolver;
