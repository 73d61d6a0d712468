//! File enumeration port.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use thiserror::Error;

/// Result type for file enumeration.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Lists the files beneath a set of directories.
#[cfg_attr(test, mockall::automock)]
pub trait FileEnumerator: Send + Sync {
    /// Returns every regular file found recursively under `roots`.
    ///
    /// Order is implementation-defined.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError`] when a directory cannot be read.
    fn files(&self, roots: &[Utf8PathBuf]) -> DiscoveryResult<Vec<Utf8PathBuf>>;
}

/// Failure while walking a search path.
#[derive(Debug, Error)]
#[error("failed to enumerate files under {root}: {source}")]
pub struct DiscoveryError {
    root: Utf8PathBuf,
    source: io::Error,
}

impl DiscoveryError {
    /// Creates an error for the search path being walked.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    /// Returns the search path that failed.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}
