//! Registry settings loaded from JSON.
//!
//! A representative document is:
//!
//! ```json
//! {
//!   "app_root": "/srv/shop",
//!   "paths": ["src/actions", "src/admin/actions"],
//!   "source_root": "src",
//!   "root_namespace": "shop",
//!   "source_extension": "rs",
//!   "auto_register": true
//! }
//! ```
//!
//! Every field is optional and falls back to [`RegistrySettings::default`].

use crate::action::{domain::normalise_path, services::DEFAULT_ACTIONS_PATH};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading registry settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read registry settings from {path}: {source}")]
    Read {
        /// Path of the settings file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The settings document is not valid.
    #[error("failed to parse registry settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A relative application root could not be anchored to the working
    /// directory.
    #[error("failed to read the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
    /// The working directory is not valid UTF-8.
    #[error("current directory is not valid UTF-8: {0}")]
    NonUtf8CurrentDir(#[from] camino::FromPathBufError),
}

/// Configuration for an action registry built with the default adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrySettings {
    /// Directory that relative paths are resolved against.
    pub app_root: Utf8PathBuf,
    /// Directories scanned by bulk discovery.
    pub paths: Vec<String>,
    /// Directory whose layout maps onto the root namespace.
    pub source_root: Utf8PathBuf,
    /// Namespace prefixed to every discovered identifier.
    pub root_namespace: String,
    /// Extension of source files that can define a type.
    pub source_extension: String,
    /// Whether the configured paths are scanned at all.
    pub auto_register: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            app_root: Utf8PathBuf::from("."),
            paths: vec![DEFAULT_ACTIONS_PATH.to_owned()],
            source_root: Utf8PathBuf::from("src"),
            root_namespace: "app".to_owned(),
            source_extension: "rs".to_owned(),
            auto_register: true,
        }
    }
}

impl RegistrySettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is not valid JSON
    /// or contains unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] when the file cannot be read and
    /// [`SettingsError::Parse`] when its contents are invalid.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, SettingsError> {
        let contents = read_settings_file(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Returns a copy with a different application root.
    #[must_use]
    pub fn with_app_root(mut self, app_root: impl Into<Utf8PathBuf>) -> Self {
        self.app_root = app_root.into();
        self
    }
}

/// Anchors `root` to the working directory when it is relative and folds
/// `.` and `..` components.
///
/// # Errors
///
/// Returns [`SettingsError::CurrentDir`] when the working directory cannot be
/// read and [`SettingsError::NonUtf8CurrentDir`] when it is not UTF-8.
pub fn absolute_app_root(root: &Utf8Path) -> Result<Utf8PathBuf, SettingsError> {
    if root.is_absolute() {
        return Ok(normalise_path(root, ""));
    }
    let working_dir = std::env::current_dir().map_err(SettingsError::CurrentDir)?;
    let utf8_working_dir = Utf8PathBuf::try_from(working_dir)?;
    Ok(normalise_path(&utf8_working_dir, root.as_str()))
}

fn read_settings_file(path: &Utf8Path) -> std::io::Result<String> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("settings path '{path}' has no file name"),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
