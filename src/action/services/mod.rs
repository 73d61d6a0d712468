//! Application services for action discovery and registration.

mod registry;
mod settings;

pub use registry::{
    ActionRegistry, ActionRegistryError, ActionRegistryResult, DEFAULT_ACTIONS_PATH,
    DefaultActionRegistry,
};
pub use settings::{RegistrySettings, SettingsError, absolute_app_root};
