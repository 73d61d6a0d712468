//! In-memory adapters for action discovery.

mod catalog;

pub use catalog::InMemoryTypeCatalog;
