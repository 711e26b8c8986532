//! Repository port for settings persistence.

use crate::settings::domain::SettingKey;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for settings store operations.
pub type SettingsResult<T> = Result<T, SettingsRepositoryError>;

/// Key-value settings store contract.
///
/// Implementations must tolerate concurrent readers. The mail subsystem only
/// ever calls [`SettingsRepository::get`]; writes and listing belong to
/// whichever host component manages settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored value for `key`, or `None` when it was never set.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsRepositoryError::Persistence`] when the backing
    /// store cannot be read.
    fn get(&self, key: &SettingKey) -> SettingsResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsRepositoryError::Persistence`] when the backing
    /// store cannot be written.
    fn set(&self, key: &SettingKey, value: String) -> SettingsResult<()>;

    /// Removes the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsRepositoryError::Persistence`] when the backing
    /// store cannot be written.
    fn delete(&self, key: &SettingKey) -> SettingsResult<()>;

    /// Returns every stored setting ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsRepositoryError::Persistence`] when the backing
    /// store cannot be read.
    fn all(&self) -> SettingsResult<BTreeMap<SettingKey, String>>;
}

/// Errors returned by settings store implementations.
#[derive(Debug, Clone, Error)]
pub enum SettingsRepositoryError {
    /// Persistence-layer failure.
    #[error("settings persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
