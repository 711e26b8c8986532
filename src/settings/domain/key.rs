//! Validated settings key type.

use super::SettingsDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a setting key, matching the `VARCHAR(100)` key column
/// of the platform settings table.
const MAX_KEY_LENGTH: usize = 100;

/// Validated key addressing a single value in the settings store.
///
/// Keys are case-sensitive. Extension drivers commonly declare camel-cased
/// fields (e.g. `customSetting1`), and namespaced keys join a driver name and
/// a field with `.` (e.g. `smtp.mail_host`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingKey(String);

impl SettingKey {
    /// Creates a validated setting key.
    ///
    /// The input is trimmed. Only characters in `[A-Za-z0-9_.-]` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError::EmptyKey`] when the value is empty after
    /// trimming, [`SettingsDomainError::InvalidKey`] when it contains other
    /// characters, or [`SettingsDomainError::KeyTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, SettingsDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(SettingsDomainError::EmptyKey);
        }

        if normalized.len() > MAX_KEY_LENGTH {
            return Err(SettingsDomainError::KeyTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

        if !is_valid {
            return Err(SettingsDomainError::InvalidKey(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SettingKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for SettingKey {
    type Error = SettingsDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
