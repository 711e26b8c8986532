//! Extension-facing builder for adding mail drivers.

use super::MailDriverRegistry;
use crate::mail::{
    domain::{DriverName, MailDomainError},
    ports::MailDriver,
};
use std::fmt;
use std::sync::Arc;

/// Collects driver registrations declared by an extension.
///
/// Declarations are applied in order, so a later declaration for a name
/// overrides an earlier one, including built-in drivers.
///
/// # Examples
///
/// ```
/// use mailroom::mail::drivers::LogDriver;
/// use mailroom::mail::services::{MailDriverRegistry, MailExtender};
///
/// let mut registry = MailDriverRegistry::with_builtin_drivers();
/// MailExtender::new()
///     .driver("log", LogDriver::new())
///     .apply(&mut registry)
///     .expect("valid driver names");
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct MailExtender {
    drivers: Vec<(String, Arc<dyn MailDriver>)>,
}

impl MailExtender {
    /// Creates an extender with no declarations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `driver` under `name`.
    #[must_use]
    pub fn driver(self, name: impl Into<String>, driver: impl MailDriver + 'static) -> Self {
        self.shared_driver(name, Arc::new(driver))
    }

    /// Declares an already shared driver under `name`.
    #[must_use]
    pub fn shared_driver(mut self, name: impl Into<String>, driver: Arc<dyn MailDriver>) -> Self {
        self.drivers.push((name.into(), driver));
        self
    }

    /// Registers every declared driver into `registry`.
    ///
    /// Names are validated up front; when any is invalid nothing is
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError`] for the first invalid driver name.
    pub fn apply(self, registry: &mut MailDriverRegistry) -> Result<(), MailDomainError> {
        let named = self
            .drivers
            .into_iter()
            .map(|(raw, driver)| DriverName::new(raw).map(|name| (name, driver)))
            .collect::<Result<Vec<_>, MailDomainError>>()?;

        for (name, driver) in named {
            registry.register(name, driver);
        }
        Ok(())
    }
}

impl fmt::Debug for MailExtender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.drivers.iter().map(|(name, _)| name))
            .finish()
    }
}
