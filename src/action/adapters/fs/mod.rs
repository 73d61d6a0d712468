//! Filesystem adapters for action discovery.

mod enumerator;

pub use enumerator::CapStdFileEnumerator;
