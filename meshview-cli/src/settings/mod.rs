//! User settings, stored as JSON.

mod backend;
mod file;

pub use backend::SettingsBackend;
pub use file::FileBackend;

use std::sync::Arc;

use log::{info, warn};
use meshview_lib::cli_query::DEFAULT_CONTROLLER_NAMESPACE;
use meshview_lib::schema::ALL_NAMESPACES;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Parse(serde_json::Error),
    #[error("serialization error: {0}")]
    Serialize(serde_json::Error),
}

/// Persistent user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path prefix prepended to every dashboard link.
    pub link_prefix: String,
    /// Namespace the control plane runs in.
    pub controller_namespace: String,
    /// Namespace tables show by default, `_all` for every namespace.
    pub selected_namespace: String,
    /// Tight column spacing.
    pub dense: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            link_prefix: String::new(),
            controller_namespace: DEFAULT_CONTROLLER_NAMESPACE.to_string(),
            selected_namespace: ALL_NAMESPACES.to_string(),
            dense: true,
        }
    }
}

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with JSON serialization.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Create a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Provider that never stores anything, for when no config directory exists.
    pub fn detached() -> Self {
        Self::new(Detached)
    }

    /// Load settings, falling back to defaults when nothing is stored.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        match self.backend.read()? {
            Some(contents) => serde_json::from_str(&contents).map_err(SettingsError::Parse),
            None => Ok(Settings::default()),
        }
    }

    /// Store `settings`.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
        self.backend.write(&contents)?;
        info!("Saved settings");
        Ok(())
    }
}

struct Detached;

impl SettingsBackend for Detached {
    fn read(&self) -> Result<Option<String>, SettingsError> {
        Ok(None)
    }

    fn write(&self, _contents: &str) -> Result<(), SettingsError> {
        warn!("No config directory, settings are not saved");
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no config directory available",
        )
        .into())
    }
}
