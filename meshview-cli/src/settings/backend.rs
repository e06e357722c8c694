//! Settings backend trait.

use super::SettingsError;

/// Backend trait for settings storage.
///
/// Implementations handle the raw document. The `SettingsProvider` wraps
/// this with typed serialization.
pub trait SettingsBackend: Send + Sync {
    /// Read the stored document, `None` if nothing was stored yet.
    fn read(&self) -> Result<Option<String>, SettingsError>;

    /// Replace the stored document.
    fn write(&self, contents: &str) -> Result<(), SettingsError>;
}
