//! Service layer answering mail settings queries.
//!
//! Provides [`MailSettingsService`], which combines the driver registry, the
//! settings store and a validator into the views an administration
//! interface needs.

use super::{
    MailDriverRegistry, MailSettings, MailSettingsDocument, RegisteredDriver, SettingsView,
    SettingsViewBuilder,
};
use crate::mail::{
    config::MailConfig,
    domain::{DriverFields, DriverName, MailDomainError, MailTransport, MessageBag},
    drivers::NullDriver,
    ports::{DriverFault, DriverResult, DriverSettings, SettingsValidator},
};
use crate::settings::{
    domain::{SettingKey, SettingsDomainError},
    ports::{SettingsRepository, SettingsRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Service-level errors for mail settings operations.
#[derive(Debug, Error)]
pub enum MailSettingsError {
    /// No driver is registered under the requested name.
    #[error("mail driver '{0}' is not registered")]
    DriverNotFound(String),
    /// A registered driver failed.
    #[error(transparent)]
    DriverFault(#[from] DriverFault),
    /// A driver name failed validation.
    #[error(transparent)]
    Domain(#[from] MailDomainError),
    /// A configured settings key is invalid.
    #[error(transparent)]
    SettingsKey(#[from] SettingsDomainError),
    /// The settings store could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsRepositoryError),
}

/// Result type for mail settings service operations.
pub type MailSettingsResult<T> = Result<T, MailSettingsError>;

/// Mail settings orchestration service.
#[derive(Clone)]
pub struct MailSettingsService<S, V>
where
    S: SettingsRepository,
    V: SettingsValidator,
{
    registry: Arc<MailDriverRegistry>,
    settings: Arc<S>,
    validator: Arc<V>,
    config: MailConfig,
}

impl<S, V> MailSettingsService<S, V>
where
    S: SettingsRepository,
    V: SettingsValidator,
{
    /// Creates a service with the default [`MailConfig`].
    #[must_use]
    pub fn new(registry: Arc<MailDriverRegistry>, settings: Arc<S>, validator: Arc<V>) -> Self {
        Self::with_config(registry, settings, validator, MailConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        registry: Arc<MailDriverRegistry>,
        settings: Arc<S>,
        validator: Arc<V>,
        config: MailConfig,
    ) -> Self {
        Self {
            registry,
            settings,
            validator,
            config,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &MailConfig {
        &self.config
    }

    /// Builds the settings view of every registered driver.
    #[must_use]
    pub fn fields(&self) -> SettingsView {
        SettingsViewBuilder::new(self.config.key_scheme).build(&self.registry, &*self.settings)
    }

    /// Looks up the driver registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`MailSettingsError::DriverNotFound`] when nothing is
    /// registered under `name`, including names no driver could be
    /// registered under.
    pub fn driver(&self, name: &str) -> MailSettingsResult<&RegisteredDriver> {
        self.lookup(name)
            .ok_or_else(|| MailSettingsError::DriverNotFound(name.to_owned()))
    }

    /// Resolves the settings of a single driver.
    ///
    /// # Errors
    ///
    /// Returns the lookup errors of [`MailSettingsService::driver`], or
    /// [`MailSettingsError::DriverFault`] when the driver's settings cannot
    /// be resolved.
    pub fn driver_fields(&self, name: &str) -> MailSettingsResult<DriverFields> {
        let entry = self.driver(name)?;
        let scope = self.scope(entry.name());
        let fields = entry
            .driver()
            .available_settings()
            .and_then(|available| scope.resolve(&available));
        attribute(entry.name(), fields)
    }

    /// Validates the current settings of a single driver.
    ///
    /// # Errors
    ///
    /// Returns the lookup errors of [`MailSettingsService::driver`], or
    /// [`MailSettingsError::DriverFault`] when validation cannot run.
    pub fn validate_driver(&self, name: &str) -> MailSettingsResult<MessageBag> {
        let entry = self.driver(name)?;
        self.validate_entry(entry)
    }

    /// Returns the name of the driver selected in the settings store.
    ///
    /// Falls back to [`MailConfig::default_driver`] when no driver is
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`MailSettingsError`] when the selection key or the stored
    /// name is invalid, or the store cannot be read.
    pub fn active_driver_name(&self) -> MailSettingsResult<DriverName> {
        Ok(DriverName::new(self.selected_driver()?)?)
    }

    /// Returns the selected driver, or the null driver when the selection
    /// names nothing registered.
    ///
    /// # Errors
    ///
    /// Returns [`MailSettingsError`] when the selection key is invalid or the
    /// store cannot be read.
    pub fn configured_driver(&self) -> MailSettingsResult<RegisteredDriver> {
        let selected = self.selected_driver()?;
        if let Some(entry) = self.lookup(&selected) {
            return Ok(entry.clone());
        }

        warn!(driver = %selected, "selected mail driver is not registered, using null driver");
        Ok(RegisteredDriver::new(
            DriverName::builtin(NullDriver::NAME),
            Arc::new(NullDriver::new()),
        ))
    }

    /// Collects the settings view and the status of the selected driver.
    ///
    /// # Errors
    ///
    /// Returns [`MailSettingsError::DriverFault`] when any registered driver
    /// fails, or the errors of [`MailSettingsService::configured_driver`].
    pub fn show(&self) -> MailSettingsResult<MailSettings> {
        let fields = self.fields().into_complete()?;
        let configured = self.configured_driver()?;
        let errors = self.validate_entry(&configured)?;
        let sending = errors.is_empty() && configured.driver().can_send();
        Ok(MailSettings::new(fields, sending, errors))
    }

    /// Same as [`MailSettingsService::show`], wrapped as an API resource.
    ///
    /// # Errors
    ///
    /// Same as [`MailSettingsService::show`].
    pub fn document(&self) -> MailSettingsResult<MailSettingsDocument> {
        Ok(MailSettingsDocument::new(self.show()?))
    }

    /// Describes the transport outgoing mail should use.
    ///
    /// A selected driver whose settings fail validation is replaced by
    /// [`MailTransport::Null`], so misconfigured mail is dropped rather than
    /// sent half-configured.
    ///
    /// # Errors
    ///
    /// Returns [`MailSettingsError::DriverFault`] when the driver cannot
    /// validate or describe its transport, or the errors of
    /// [`MailSettingsService::configured_driver`].
    pub fn transport(&self) -> MailSettingsResult<MailTransport> {
        let configured = self.configured_driver()?;
        let errors = self.validate_entry(&configured)?;
        if !errors.is_empty() {
            warn!(
                driver = %configured.name(),
                invalid_fields = errors.len(),
                "mail driver settings are invalid, falling back to null transport"
            );
            return Ok(MailTransport::Null);
        }

        let scope = self.scope(configured.name());
        attribute(
            configured.name(),
            configured.driver().build_transport(&scope),
        )
    }

    fn selected_driver(&self) -> MailSettingsResult<String> {
        let key = SettingKey::new(self.config.driver_setting.as_str())?;
        Ok(self
            .settings
            .get(&key)?
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.config.default_driver.clone()))
    }

    fn lookup(&self, name: &str) -> Option<&RegisteredDriver> {
        DriverName::new(name)
            .ok()
            .and_then(|driver_name| self.registry.get(&driver_name))
    }

    fn scope<'a>(&'a self, name: &'a DriverName) -> DriverSettings<'a> {
        DriverSettings::new(&*self.settings, name, self.config.key_scheme)
    }

    fn validate_entry(&self, entry: &RegisteredDriver) -> MailSettingsResult<MessageBag> {
        let scope = self.scope(entry.name());
        attribute(
            entry.name(),
            entry.driver().validate(&scope, &*self.validator),
        )
    }
}

fn attribute<T>(name: &DriverName, result: DriverResult<T>) -> MailSettingsResult<T> {
    result.map_err(|err| DriverFault::new(name.clone(), err).into())
}
