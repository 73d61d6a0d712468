//! Shared world state for action discovery BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actuary::action::{
    adapters::memory::InMemoryTypeCatalog,
    domain::{Action, ActionHookError, ActionIdentifier},
    services::{ActionRegistry, ActionRegistryError, DefaultActionRegistry, RegistrySettings},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use rstest::fixture;
use tempfile::TempDir;

/// Registry type used by the BDD world.
pub type TestRegistry = DefaultActionRegistry<InMemoryTypeCatalog>;

/// Registration hook that counts calls and can fail a set number of times.
#[derive(Debug, Default)]
pub struct CountingHook {
    calls: AtomicUsize,
    failures_remaining: AtomicUsize,
}

impl CountingHook {
    /// Creates a hook that fails its first `failures` invocations.
    #[must_use]
    pub fn failing(failures: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failures_remaining: AtomicUsize::new(failures),
        }
    }

    /// Returns how many times the hook ran.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Action for CountingHook {
    fn register(&self) -> Result<(), ActionHookError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let fails = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if fails {
            return Err(ActionHookError::message("hook failed"));
        }
        Ok(())
    }
}

/// Scenario world for action discovery behaviour tests.
pub struct DiscoveryWorld {
    /// Temporary application root; removed when the world is dropped.
    pub app_dir: TempDir,
    /// UTF-8 view of the application root.
    pub app_root: Utf8PathBuf,
    /// Type catalog shared with the registry.
    pub catalog: Arc<InMemoryTypeCatalog>,
    /// Hooks defined in the scenario, keyed by identifier.
    pub hooks: HashMap<String, Arc<CountingHook>>,
    /// Results of explicit registration attempts, in call order.
    pub register_results: Vec<Result<(), ActionRegistryError>>,
    registry: Option<TestRegistry>,
}

impl DiscoveryWorld {
    /// Creates a world with an empty application root.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let app_dir = tempfile::tempdir().expect("create temporary application root");
        let app_root = Utf8PathBuf::from_path_buf(app_dir.path().to_path_buf())
            .expect("temporary application root should be UTF-8");
        Self {
            app_dir,
            app_root,
            catalog: Arc::new(InMemoryTypeCatalog::new()),
            hooks: HashMap::new(),
            register_results: Vec::new(),
            registry: None,
        }
    }

    /// Returns the registry, building it from default settings on first use.
    ///
    /// Search paths are resolved when the registry is built, so source files
    /// must be laid out before the first call.
    ///
    /// # Errors
    ///
    /// Returns an error when the registry cannot be built from settings.
    pub fn registry(&mut self) -> Result<&mut TestRegistry, eyre::Report> {
        if self.registry.is_none() {
            let settings = RegistrySettings::default().with_app_root(self.app_root.clone());
            let built = ActionRegistry::from_settings(&settings, Arc::clone(&self.catalog))?;
            self.registry = Some(built);
        }
        self.registry
            .as_mut()
            .ok_or_else(|| eyre::eyre!("registry was not built"))
    }

    /// Creates an empty source file relative to the application root.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file or its parents cannot be created.
    pub fn write_source_file(&self, relative: &str) -> std::io::Result<()> {
        let dir = Dir::open_ambient_dir(&self.app_root, ambient_authority())?;
        if let Some(parent) = Utf8Path::new(relative).parent()
            && !parent.as_str().is_empty()
        {
            dir.create_dir_all(parent)?;
        }
        dir.write(relative, "")
    }

    /// Defines a concrete action backed by a counting hook.
    ///
    /// # Errors
    ///
    /// Returns an error when the identifier is malformed or the catalog
    /// rejects the definition.
    pub fn define_action(&mut self, name: &str, hook: CountingHook) -> Result<(), eyre::Report> {
        let shared = Arc::new(hook);
        self.catalog
            .define_action(ActionIdentifier::new(name)?, shared.clone())?;
        self.hooks.insert(name.to_owned(), shared);
        Ok(())
    }
}

impl Default for DiscoveryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}
