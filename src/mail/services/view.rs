//! Per-request view of every registered driver's settings.

use super::MailDriverRegistry;
use crate::mail::{
    domain::{DriverFields, DriverName},
    ports::{DriverFault, DriverResult, DriverSettings, MailDriver, SettingKeyScheme},
};
use crate::settings::ports::SettingsRepository;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

/// Resolved settings of every registered driver, keyed by driver name.
///
/// Built fresh for each request and never cached. Drivers whose settings
/// could not be resolved are listed in [`SettingsView::faults`] instead of
/// [`SettingsView::fields`]; every registered driver appears in exactly one
/// of the two.
#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    fields: Vec<(DriverName, DriverFields)>,
    faults: Vec<DriverFault>,
}

impl SettingsView {
    /// Returns the resolved fields of the driver registered as `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DriverFields> {
        self.fields
            .iter()
            .find(|(driver, _)| driver.as_str() == name)
            .map(|(_, fields)| fields)
    }

    /// Returns whether `name` was resolved successfully.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the resolved drivers in registration order.
    #[must_use]
    pub fn fields(&self) -> &[(DriverName, DriverFields)] {
        &self.fields
    }

    /// Returns the drivers that failed to resolve.
    #[must_use]
    pub fn faults(&self) -> &[DriverFault] {
        &self.faults
    }

    /// Returns `true` when every registered driver resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.faults.is_empty()
    }

    /// Returns the view only if every driver resolved.
    ///
    /// # Errors
    ///
    /// Returns the first recorded [`DriverFault`].
    pub fn into_complete(mut self) -> Result<Self, DriverFault> {
        if self.faults.is_empty() {
            return Ok(self);
        }
        Err(self.faults.swap_remove(0))
    }

    /// Returns the number of resolved drivers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no driver resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over resolved driver names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &DriverName> {
        self.fields.iter().map(|(name, _)| name)
    }
}

impl Serialize for SettingsView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, fields) in &self.fields {
            map.serialize_entry(name, fields)?;
        }
        map.end()
    }
}

/// Builds [`SettingsView`]s from a registry and a settings store.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsViewBuilder {
    scheme: SettingKeyScheme,
}

impl SettingsViewBuilder {
    /// Creates a builder resolving keys with `scheme`.
    #[must_use]
    pub const fn new(scheme: SettingKeyScheme) -> Self {
        Self { scheme }
    }

    /// Resolves the settings of every driver in `registry`.
    ///
    /// Each driver's field list is requested anew. The settings store is
    /// only read.
    #[must_use]
    pub fn build(
        self,
        registry: &MailDriverRegistry,
        settings: &dyn SettingsRepository,
    ) -> SettingsView {
        let mut view = SettingsView::default();

        for entry in registry.all() {
            let scope = DriverSettings::new(settings, entry.name(), self.scheme);
            match resolve_driver(entry.driver().as_ref(), &scope) {
                Ok(fields) => view.fields.push((entry.name().clone(), fields)),
                Err(err) => {
                    warn!(
                        driver = %entry.name(),
                        error = %err,
                        "could not resolve mail driver settings"
                    );
                    view.faults.push(DriverFault::new(entry.name().clone(), err));
                }
            }
        }

        debug!(
            resolved = view.fields.len(),
            faulted = view.faults.len(),
            "built mail settings view"
        );
        view
    }
}

fn resolve_driver(
    driver: &dyn MailDriver,
    scope: &DriverSettings<'_>,
) -> DriverResult<DriverFields> {
    let available = driver.available_settings()?;
    scope.resolve(&available)
}

/// Builds a view with the default key scheme.
#[must_use]
pub fn build_view(registry: &MailDriverRegistry, settings: &dyn SettingsRepository) -> SettingsView {
    SettingsViewBuilder::default().build(registry, settings)
}
