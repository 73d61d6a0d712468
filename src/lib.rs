//! Actuary: action discovery and registration.
//!
//! This crate scans an application's source directories for types that
//! satisfy the [`action::domain::Action`] contract and registers each of them
//! exactly once by invoking the type's own registration hook.
//!
//! # Architecture
//!
//! Actuary follows hexagonal architecture principles:
//!
//! - **Domain**: Identifiers, candidates, and the registration record
//! - **Ports**: Abstract trait interfaces for type metadata, file enumeration,
//!   and identifier resolution
//! - **Adapters**: Concrete implementations of ports (filesystem, in-memory)
//!
//! # Modules
//!
//! - [`action`]: Discovery, classification, and registration of actions

pub mod action;
