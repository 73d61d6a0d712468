//! Search path resolution for automatic discovery.

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Absolute directories scanned by bulk discovery.
///
/// Entries are lexically normalised, unique, and were existing directories
/// when the set was built. Order is first-seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    paths: Vec<Utf8PathBuf>,
}

impl SearchPaths {
    /// Creates an empty set, which disables bulk discovery.
    #[must_use]
    pub const fn empty() -> Self {
        Self { paths: Vec::new() }
    }

    /// Resolves raw path strings against `app_root`.
    ///
    /// Relative entries are joined onto `app_root`, `.` and `..` components
    /// are folded lexically, duplicates are removed, and entries that are not
    /// currently directories are dropped without error.
    pub fn resolve<I, S>(app_root: &Utf8Path, raw_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths: Vec<Utf8PathBuf> = Vec::new();
        for raw in raw_paths {
            let normalised = normalise(app_root, raw.as_ref());
            if paths.contains(&normalised) {
                continue;
            }
            if !normalised.is_dir() {
                tracing::debug!(path = %normalised, "dropping search path that is not a directory");
                continue;
            }
            paths.push(normalised);
        }
        Self { paths }
    }

    /// Reports whether no directory is configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the number of configured directories.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns the configured directories in first-seen order.
    #[must_use]
    pub const fn as_slice(&self) -> &[Utf8PathBuf] {
        self.paths.as_slice()
    }

    /// Iterates over the configured directories.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.paths.iter().map(Utf8PathBuf::as_path)
    }
}

pub(crate) fn normalise(app_root: &Utf8Path, raw: &str) -> Utf8PathBuf {
    let candidate = Utf8Path::new(raw);
    let joined = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        app_root.join(candidate)
    };

    let mut normalised = Utf8PathBuf::new();
    for component in joined.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                let last = normalised.components().next_back();
                let folds = matches!(last, Some(Utf8Component::Normal(_)));
                // `..` above the root stays at the root.
                let at_root = matches!(
                    last,
                    Some(Utf8Component::RootDir | Utf8Component::Prefix(_))
                );
                if folds {
                    normalised.pop();
                } else if !at_root {
                    normalised.push("..");
                }
            }
            other => normalised.push(other.as_str()),
        }
    }
    normalised
}
