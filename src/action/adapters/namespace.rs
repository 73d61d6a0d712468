//! Path-to-namespace identifier resolution.

use crate::action::{
    domain::{ActionIdentifier, SEGMENT_SEPARATOR},
    ports::IdentifierResolver,
};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolves files to identifiers by mirroring the directory layout.
///
/// A file `<source_root>/actions/billing/SendInvoice.rs` under root namespace
/// `app` resolves to `app::actions::billing::SendInvoice`. Files outside the
/// source root, with another extension, or whose path segments are not
/// identifiers resolve to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceResolver {
    source_root: Utf8PathBuf,
    root_namespace: Vec<String>,
    extension: String,
}

impl NamespaceResolver {
    /// Creates a resolver.
    ///
    /// `root_namespace` may be empty or `::`-separated; `extension` may be
    /// given with or without its leading dot.
    #[must_use]
    pub fn new(
        source_root: impl Into<Utf8PathBuf>,
        root_namespace: &str,
        extension: &str,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            root_namespace: root_namespace
                .split(SEGMENT_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
            extension: extension.trim_start_matches('.').to_owned(),
        }
    }

    /// Returns the directory that maps onto the root namespace.
    #[must_use]
    pub fn source_root(&self) -> &Utf8Path {
        &self.source_root
    }
}

impl IdentifierResolver for NamespaceResolver {
    fn resolve(&self, file: &Utf8Path) -> Option<ActionIdentifier> {
        if file.extension() != Some(self.extension.as_str()) {
            return None;
        }

        let relative = file.strip_prefix(&self.source_root).ok()?;
        let stem = relative.with_extension("");

        let mut segments: Vec<&str> = self.root_namespace.iter().map(String::as_str).collect();
        for component in stem.components() {
            match component {
                Utf8Component::Normal(segment) => segments.push(segment),
                _ => return None,
            }
        }

        ActionIdentifier::from_segments(segments).ok()
    }
}
