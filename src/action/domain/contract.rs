//! The self-registration contract implemented by action types.

use std::sync::Arc;
use thiserror::Error;

/// Contract for a self-registering action type.
///
/// Implementors are type-level handles rather than per-request values: the
/// registry invokes [`Action::register`] at most once per identifier, and
/// whatever the hook wires into the host (container bindings, routes, job
/// handlers) is outside the registry's control.
#[cfg_attr(test, mockall::automock)]
pub trait Action: Send + Sync {
    /// Wires the action into the host environment.
    ///
    /// # Errors
    ///
    /// Returns [`ActionHookError`] when the host rejects the wiring. The
    /// registry does not retry and does not record the action.
    fn register(&self) -> Result<(), ActionHookError>;
}

/// Error raised by an action's own registration hook.
///
/// The wrapped error is displayed verbatim.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ActionHookError(Arc<dyn std::error::Error + Send + Sync>);

impl ActionHookError {
    /// Wraps the error raised by a hook.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Creates a hook error from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(std::io::Error::other(message.into()))
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.0
    }
}
