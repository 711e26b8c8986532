//! Settings access scoped to a single registered driver.

use super::DriverResult;
use crate::mail::domain::{AvailableSettings, DriverFields, DriverName};
use crate::settings::{
    domain::{SettingKey, SettingsDomainError},
    ports::SettingsRepository,
};
use serde::{Deserialize, Serialize};

/// How a driver's field names map onto settings store keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKeyScheme {
    /// `{driver}.{field}`, so that drivers sharing a field name never see
    /// each other's values.
    #[default]
    Namespaced,
    /// The bare field name, shared by every driver.
    Flat,
}

impl SettingKeyScheme {
    /// Returns the settings key for `field` of `driver`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError`] when the resulting key is not a valid
    /// [`SettingKey`].
    pub fn key_for(self, driver: &DriverName, field: &str) -> Result<SettingKey, SettingsDomainError> {
        match self {
            Self::Namespaced => SettingKey::new(format!("{driver}.{field}")),
            Self::Flat => SettingKey::new(field),
        }
    }
}

/// Read access to the settings of one registered driver.
///
/// The same driver implementation may be registered under several names;
/// the scope carries the name it is being asked about so that keys resolve
/// to that registration.
#[derive(Clone, Copy)]
pub struct DriverSettings<'a> {
    repository: &'a dyn SettingsRepository,
    driver: &'a DriverName,
    scheme: SettingKeyScheme,
}

impl<'a> DriverSettings<'a> {
    /// Creates a scope for `driver` over `repository`.
    #[must_use]
    pub const fn new(
        repository: &'a dyn SettingsRepository,
        driver: &'a DriverName,
        scheme: SettingKeyScheme,
    ) -> Self {
        Self {
            repository,
            driver,
            scheme,
        }
    }

    /// Returns the registered name this scope reads for.
    #[must_use]
    pub const fn driver(&self) -> &DriverName {
        self.driver
    }

    /// Returns the settings key backing `field`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError`] when the key would be invalid.
    pub fn key(&self, field: &str) -> Result<SettingKey, SettingsDomainError> {
        self.scheme.key_for(self.driver, field)
    }

    /// Returns the stored value of `field`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`super::DriverError`] when the key is invalid or the store
    /// cannot be read.
    pub fn get(&self, field: &str) -> DriverResult<Option<String>> {
        let key = self.key(field)?;
        Ok(self.repository.get(&key)?)
    }

    /// Returns the stored value of `field`, treating empty strings as absent.
    ///
    /// # Errors
    ///
    /// Same as [`DriverSettings::get`].
    pub fn get_non_empty(&self, field: &str) -> DriverResult<Option<String>> {
        Ok(self
            .get(field)?
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty()))
    }

    /// Resolves every declared field to its stored value or its default.
    ///
    /// # Errors
    ///
    /// Same as [`DriverSettings::get`].
    pub fn resolve(&self, available: &AvailableSettings) -> DriverResult<DriverFields> {
        available
            .iter()
            .map(|field| -> DriverResult<(String, String)> {
                let value = self
                    .get(field.name())?
                    .unwrap_or_else(|| field.default_value().to_owned());
                Ok((field.name().to_owned(), value))
            })
            .collect()
    }
}
