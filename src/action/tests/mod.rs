//! Unit tests for action discovery and registration.
