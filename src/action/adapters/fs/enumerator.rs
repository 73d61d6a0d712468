//! Recursive file enumeration over capability-scoped directory handles.

use crate::action::ports::{DiscoveryError, DiscoveryResult, FileEnumerator};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

/// Walks search paths with `cap-std` UTF-8 directory handles.
///
/// Each root is opened with ambient authority; everything below it is reached
/// through the opened handle. Symbolic links are not followed, and entries
/// whose names are not valid UTF-8 are reported as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapStdFileEnumerator;

impl CapStdFileEnumerator {
    /// Creates the enumerator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileEnumerator for CapStdFileEnumerator {
    fn files(&self, roots: &[Utf8PathBuf]) -> DiscoveryResult<Vec<Utf8PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            let dir = Dir::open_ambient_dir(root, ambient_authority())
                .map_err(|err| DiscoveryError::new(root.clone(), err))?;
            collect_files(&dir, root, &mut files)
                .map_err(|err| DiscoveryError::new(root.clone(), err))?;
        }
        Ok(files)
    }
}

fn collect_files(dir: &Dir, prefix: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> io::Result<()> {
    for listed in dir.entries()? {
        let entry = listed?;
        let name = entry.file_name()?;
        let file_type = entry.file_type()?;
        let path = prefix.join(&name);

        if file_type.is_dir() {
            let child = entry.open_dir()?;
            collect_files(&child, &path, files)?;
        } else if file_type.is_file() {
            files.push(path);
        }
    }
    Ok(())
}
