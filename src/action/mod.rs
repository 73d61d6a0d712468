//! Action discovery and registration.
//!
//! Scans configured directories for source units naming types that satisfy
//! the [`domain::Action`] contract, and drives every such type through its
//! own registration hook exactly once. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The registry service and its settings in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
