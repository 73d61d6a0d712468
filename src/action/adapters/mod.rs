//! Adapter implementations for action discovery ports.

pub mod fs;
pub mod memory;

mod namespace;

pub use namespace::NamespaceResolver;
