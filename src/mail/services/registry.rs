//! Registry of mail drivers keyed by name.
//!
//! Provides [`MailDriverRegistry`], the name-to-driver mapping populated
//! while extensions load. Registering a name twice replaces the first
//! driver; there is no removal.

use crate::mail::{
    domain::DriverName,
    drivers::SmtpDriver,
    ports::MailDriver,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A driver together with the name it is registered under.
#[derive(Clone)]
pub struct RegisteredDriver {
    name: DriverName,
    driver: Arc<dyn MailDriver>,
}

impl RegisteredDriver {
    pub(crate) const fn new(name: DriverName, driver: Arc<dyn MailDriver>) -> Self {
        Self { name, driver }
    }

    /// Returns the registered name.
    #[must_use]
    pub const fn name(&self) -> &DriverName {
        &self.name
    }

    /// Returns the driver.
    #[must_use]
    pub const fn driver(&self) -> &Arc<dyn MailDriver> {
        &self.driver
    }
}

impl fmt::Debug for RegisteredDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredDriver")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Name-to-driver mapping with last-registration-wins semantics.
///
/// The registry is mutated through `&mut self` while the host boots and is
/// then shared read-only, usually behind an [`Arc`]. It performs no internal
/// locking; hosts that register drivers after start-up must serialise those
/// calls themselves.
#[derive(Debug, Clone, Default)]
pub struct MailDriverRegistry {
    entries: Vec<RegisteredDriver>,
    index: HashMap<DriverName, usize>,
}

impl MailDriverRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `smtp` driver.
    #[must_use]
    pub fn with_builtin_drivers() -> Self {
        let mut registry = Self::new();
        registry.register(
            DriverName::builtin(SmtpDriver::NAME),
            Arc::new(SmtpDriver::new()),
        );
        registry
    }

    /// Registers `driver` under `name`.
    ///
    /// When `name` is already registered the previous driver is discarded
    /// and the new one takes its place, keeping the position of the first
    /// registration.
    pub fn register(&mut self, name: DriverName, driver: Arc<dyn MailDriver>) {
        let existing = self
            .index
            .get(&name)
            .and_then(|&position| self.entries.get_mut(position));

        if let Some(entry) = existing {
            debug!(driver = %name, replaced = true, "registered mail driver");
            entry.driver = driver;
            return;
        }

        debug!(driver = %name, replaced = false, "registered mail driver");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(RegisteredDriver::new(name, driver));
    }

    /// Returns every registered driver once, in first-registration order.
    #[must_use]
    pub fn all(&self) -> &[RegisteredDriver] {
        &self.entries
    }

    /// Looks up the driver registered under `name`.
    #[must_use]
    pub fn get(&self, name: &DriverName) -> Option<&RegisteredDriver> {
        self.index
            .get(name)
            .and_then(|&position| self.entries.get(position))
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &DriverName) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over registered names in first-registration order.
    pub fn names(&self) -> impl Iterator<Item = &DriverName> {
        self.entries.iter().map(RegisteredDriver::name)
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
