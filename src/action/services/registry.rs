//! Service layer for action discovery and registration.
//!
//! Provides [`ActionRegistry`], which classifies candidates, keeps the
//! ordered record of registered actions, and invokes each action's own
//! registration hook exactly once.

use crate::action::{
    adapters::{NamespaceResolver, fs::CapStdFileEnumerator},
    domain::{
        ActionCandidate, ActionHookError, ActionIdentifier, RegisteredSet, SearchPaths,
        normalise_path,
    },
    ports::{DiscoveryError, FileEnumerator, IdentifierResolver, ReflectionError, TypeCatalog},
    services::{RegistrySettings, SettingsError, absolute_app_root},
};
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Search path applied at construction, relative to the application root.
pub const DEFAULT_ACTIONS_PATH: &str = "src/actions";

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum ActionRegistryError {
    /// A candidate's type could not be introspected.
    #[error(transparent)]
    Reflection(#[from] ReflectionError),
    /// An action's registration hook failed.
    #[error(transparent)]
    Hook(#[from] ActionHookError),
    /// A search path could not be walked.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Result type for registry operations.
pub type ActionRegistryResult<T> = Result<T, ActionRegistryError>;

/// Registry wired with the filesystem and namespace adapters.
pub type DefaultActionRegistry<T> = ActionRegistry<T, NamespaceResolver, CapStdFileEnumerator>;

/// Discovers actions and registers each one exactly once.
///
/// The registry owns its record of registered identifiers; mutating
/// operations take `&mut self`, so hosts that share a registry across threads
/// must wrap it in a mutex.
pub struct ActionRegistry<T, R, E>
where
    T: TypeCatalog,
    R: IdentifierResolver,
    E: FileEnumerator,
{
    catalog: Arc<T>,
    resolver: Arc<R>,
    enumerator: Arc<E>,
    app_root: Utf8PathBuf,
    paths: SearchPaths,
    registered: RegisteredSet,
}

impl<T> DefaultActionRegistry<T>
where
    T: TypeCatalog,
{
    /// Builds a registry from settings with the default adapters.
    ///
    /// A relative `settings.app_root` is anchored to the working directory;
    /// relative `source_root` and `paths` entries are then resolved against
    /// it. When `auto_register` is off, no search path is configured.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a relative application root cannot be
    /// made absolute.
    pub fn from_settings(
        settings: &RegistrySettings,
        catalog: Arc<T>,
    ) -> Result<Self, SettingsError> {
        let app_root = absolute_app_root(&settings.app_root)?;
        let source_root = normalise_path(&app_root, settings.source_root.as_str());
        let resolver = NamespaceResolver::new(
            source_root,
            &settings.root_namespace,
            &settings.source_extension,
        );
        let mut registry = Self::new(
            catalog,
            Arc::new(resolver),
            Arc::new(CapStdFileEnumerator::new()),
            app_root,
        )?;
        if settings.auto_register {
            registry.configure_paths(&settings.paths);
        } else {
            registry.disable_auto_registration();
        }
        Ok(registry)
    }
}

impl<T, R, E> ActionRegistry<T, R, E>
where
    T: TypeCatalog,
    R: IdentifierResolver,
    E: FileEnumerator,
{
    /// Creates a registry searching [`DEFAULT_ACTIONS_PATH`] under `root`.
    ///
    /// A relative `root` is anchored to the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a relative `root` cannot be made
    /// absolute.
    pub fn new(
        catalog: Arc<T>,
        resolver: Arc<R>,
        enumerator: Arc<E>,
        root: impl AsRef<Utf8Path>,
    ) -> Result<Self, SettingsError> {
        let app_root = absolute_app_root(root.as_ref())?;
        let paths = SearchPaths::resolve(&app_root, [DEFAULT_ACTIONS_PATH]);
        Ok(Self {
            catalog,
            resolver,
            enumerator,
            app_root,
            paths,
            registered: RegisteredSet::new(),
        })
    }

    /// Returns the application root relative paths are resolved against.
    #[must_use]
    pub fn app_root(&self) -> &Utf8Path {
        &self.app_root
    }

    /// Returns the directories bulk discovery will scan.
    #[must_use]
    pub const fn search_paths(&self) -> &SearchPaths {
        &self.paths
    }

    /// Replaces the search paths.
    ///
    /// Entries are resolved against the application root, deduplicated, and
    /// filtered to existing directories; missing directories are dropped
    /// silently.
    pub fn configure_paths<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.paths = SearchPaths::resolve(&self.app_root, paths);
        self
    }

    /// Clears the search paths so bulk discovery does nothing.
    pub fn disable_auto_registration(&mut self) -> &mut Self {
        self.paths = SearchPaths::empty();
        self
    }

    /// Registers every action found under the search paths.
    ///
    /// Returns immediately, without touching the filesystem, when no search
    /// path is configured. Files the resolver cannot map to an identifier are
    /// skipped. The first error aborts the remainder of the scan; actions
    /// registered before it stay registered.
    ///
    /// # Errors
    ///
    /// Returns [`ActionRegistryError::Discovery`] when a search path cannot be
    /// walked, and otherwise the errors of [`Self::register`].
    pub fn register_all_discovered(&mut self) -> ActionRegistryResult<()> {
        if self.paths.is_empty() {
            tracing::debug!("no search paths configured; skipping discovery");
            return Ok(());
        }

        let files = self.enumerator.files(self.paths.as_slice())?;
        for file in files {
            let Some(identifier) = self.resolver.resolve(&file) else {
                tracing::debug!(%file, "skipping file without a type identifier");
                continue;
            };
            self.register(&identifier)?;
        }
        Ok(())
    }

    /// Registers one action by identifier or instance.
    ///
    /// Candidates that are not concrete actions, and actions already
    /// registered, are ignored. Otherwise the action's hook is invoked and,
    /// only if it succeeds, the identifier is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ActionRegistryError::Reflection`] when the candidate is
    /// malformed or unknown to the catalog, and [`ActionRegistryError::Hook`]
    /// when the hook fails. A failed hook leaves the identifier unrecorded,
    /// so a later call runs the hook again.
    pub fn register<'c>(
        &mut self,
        candidate: impl Into<ActionCandidate<'c>>,
    ) -> ActionRegistryResult<()> {
        let target: ActionCandidate<'c> = candidate.into();
        let identifier = target.resolve().map_err(ReflectionError::from)?;
        let info = self.catalog.introspect(&identifier)?;

        let Some(hook) = info.registration_hook() else {
            tracing::debug!(%identifier, "ignoring candidate that is not a concrete action");
            return Ok(());
        };

        if self.registered.contains(&identifier) {
            tracing::debug!(%identifier, "action already registered");
            return Ok(());
        }

        hook.register()?;
        tracing::info!(%identifier, "registered action");
        self.registered.insert(identifier);
        Ok(())
    }

    /// Reports whether a candidate is a concrete action type.
    ///
    /// # Errors
    ///
    /// Returns [`ReflectionError`] when the candidate is malformed or unknown
    /// to the catalog.
    pub fn is_action_type<'c>(
        &self,
        candidate: impl Into<ActionCandidate<'c>>,
    ) -> Result<bool, ReflectionError> {
        let target: ActionCandidate<'c> = candidate.into();
        let identifier = target.resolve()?;
        Ok(self.catalog.introspect(&identifier)?.is_concrete_action())
    }

    /// Reports whether a candidate has been registered.
    ///
    /// A malformed identifier is never registered.
    #[must_use]
    pub fn is_already_registered<'c>(&self, candidate: impl Into<ActionCandidate<'c>>) -> bool {
        let target: ActionCandidate<'c> = candidate.into();
        target
            .resolve()
            .is_ok_and(|identifier| self.registered.contains(&identifier))
    }

    /// Returns the registered identifiers in registration order.
    #[must_use]
    pub fn registered(&self) -> Vec<ActionIdentifier> {
        self.registered.snapshot()
    }
}
