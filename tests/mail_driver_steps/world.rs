//! Shared world state for mail driver BDD scenarios.

use std::sync::Arc;

use mailroom::{
    mail::{
        domain::{DriverFields, MailTransport},
        services::{MailDriverRegistry, MailSettings, MailSettingsService, SettingsView},
        validation::RuleValidator,
    },
    settings::adapters::memory::InMemorySettingsRepository,
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestMailService = MailSettingsService<InMemorySettingsRepository, RuleValidator>;

/// Scenario world for mail driver behaviour tests.
pub struct MailWorld {
    /// Registry populated by given steps.
    pub registry: MailDriverRegistry,
    /// Settings store shared with the service.
    pub settings: InMemorySettingsRepository,
    /// Last built settings view.
    pub view: Option<SettingsView>,
    /// Last shown mail settings.
    pub shown: Option<MailSettings>,
    /// Last resolved transport.
    pub transport: Option<MailTransport>,
}

impl MailWorld {
    /// Creates a world with an empty registry and store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: MailDriverRegistry::new(),
            settings: InMemorySettingsRepository::new(),
            view: None,
            shown: None,
            transport: None,
        }
    }

    /// Builds a service over the current registry and store.
    pub fn service(&self) -> TestMailService {
        MailSettingsService::new(
            Arc::new(self.registry.clone()),
            Arc::new(self.settings.clone()),
            Arc::new(RuleValidator::new()),
        )
    }

    /// Returns the fields of `driver` from the last built view.
    pub fn driver_fields(&self, driver: &str) -> Result<&DriverFields, eyre::Report> {
        let view = self
            .view
            .as_ref()
            .ok_or_else(|| eyre::eyre!("settings view has not been built"))?;
        view.get(driver)
            .ok_or_else(|| eyre::eyre!("driver '{driver}' missing from view"))
    }

    /// Returns the last shown mail settings.
    pub fn shown(&self) -> Result<&MailSettings, eyre::Report> {
        self.shown
            .as_ref()
            .ok_or_else(|| eyre::eyre!("mail settings have not been shown"))
    }
}

impl Default for MailWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MailWorld {
    MailWorld::default()
}
