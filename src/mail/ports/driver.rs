//! Driver port: the capability set of a pluggable mail driver.

use super::{DriverSettings, SettingsValidator};
use crate::mail::domain::{
    AvailableSettings, DriverName, MailDomainError, MailTransport, MessageBag,
};
use crate::settings::{domain::SettingsDomainError, ports::SettingsRepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Capability set every mail driver provides.
///
/// Drivers are constructed by the code that registers them and are shared
/// read-only afterwards, so implementations must be `Send + Sync` and should
/// not cache settings: every call sees the settings store as it is now.
pub trait MailDriver: Send + Sync {
    /// Lists the settings fields this driver understands.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when the driver cannot describe its fields,
    /// for example because its declaration is malformed.
    fn available_settings(&self) -> DriverResult<AvailableSettings>;

    /// Checks the driver's current settings, returning any problems found.
    ///
    /// An empty [`MessageBag`] means the driver is usable as configured.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when settings cannot be read. Invalid values
    /// are reported in the bag, not as errors.
    fn validate(
        &self,
        settings: &DriverSettings<'_>,
        validator: &dyn SettingsValidator,
    ) -> DriverResult<MessageBag>;

    /// Returns whether mail handed to this driver actually leaves the system.
    fn can_send(&self) -> bool;

    /// Describes the transport this driver delivers through.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] when settings cannot be read or do not form a
    /// usable transport.
    fn build_transport(&self, settings: &DriverSettings<'_>) -> DriverResult<MailTransport>;
}

/// Errors raised by drivers.
#[derive(Debug, Clone, Error)]
pub enum DriverError {
    /// Declared fields or transport settings failed domain validation.
    #[error(transparent)]
    Domain(#[from] MailDomainError),

    /// A field could not be mapped to a settings key.
    #[error(transparent)]
    SettingsKey(#[from] SettingsDomainError),

    /// The settings store could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsRepositoryError),

    /// Driver-specific failure.
    #[error("mail driver fault: {0}")]
    Fault(Arc<dyn std::error::Error + Send + Sync>),
}

impl DriverError {
    /// Wraps a driver-specific error.
    pub fn fault(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Fault(Arc::new(err))
    }
}

/// A driver failure attributed to the name it is registered under.
#[derive(Debug, Clone, Error)]
#[error("mail driver '{driver}' failed: {error}")]
pub struct DriverFault {
    driver: DriverName,
    #[source]
    error: DriverError,
}

impl DriverFault {
    /// Attributes `error` to `driver`.
    #[must_use]
    pub const fn new(driver: DriverName, error: DriverError) -> Self {
        Self { driver, error }
    }

    /// Returns the registered name of the failing driver.
    #[must_use]
    pub const fn driver(&self) -> &DriverName {
        &self.driver
    }

    /// Returns the underlying driver error.
    #[must_use]
    pub const fn error(&self) -> &DriverError {
        &self.error
    }
}
