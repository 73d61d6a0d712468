//! Step definitions for action discovery BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
