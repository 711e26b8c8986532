//! Test drivers shared by the mail unit tests.

use crate::mail::{
    domain::{AvailableSettings, MailDomainError, MailTransport, MessageBag},
    ports::{DriverError, DriverResult, DriverSettings, MailDriver, SettingsValidator},
};
use crate::settings::{adapters::memory::InMemorySettingsRepository, domain::SettingKey};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Builds an in-memory store holding `values`.
pub fn store(values: &[(&str, &str)]) -> InMemorySettingsRepository {
    InMemorySettingsRepository::with_values(values.iter().map(|(key, value)| {
        (
            SettingKey::new(*key).expect("valid test key"),
            (*value).to_owned(),
        )
    }))
}

/// Driver declaring a single `customSetting1` field that never sends.
#[derive(Debug, Default)]
pub struct CustomDriver;

impl MailDriver for CustomDriver {
    fn available_settings(&self) -> DriverResult<AvailableSettings> {
        Ok(AvailableSettings::from_names(["customSetting1"])?)
    }

    fn validate(
        &self,
        _settings: &DriverSettings<'_>,
        _validator: &dyn SettingsValidator,
    ) -> DriverResult<MessageBag> {
        Ok(MessageBag::new())
    }

    fn can_send(&self) -> bool {
        false
    }

    fn build_transport(&self, _settings: &DriverSettings<'_>) -> DriverResult<MailTransport> {
        Ok(MailTransport::Null)
    }
}

/// Driver whose field declaration always fails.
#[derive(Debug, Default)]
pub struct BrokenDriver;

impl MailDriver for BrokenDriver {
    fn available_settings(&self) -> DriverResult<AvailableSettings> {
        Err(DriverError::from(MailDomainError::DuplicateField(
            "api_key".to_owned(),
        )))
    }

    fn validate(
        &self,
        _settings: &DriverSettings<'_>,
        _validator: &dyn SettingsValidator,
    ) -> DriverResult<MessageBag> {
        Err(DriverError::fault(std::io::Error::other("validator offline")))
    }

    fn can_send(&self) -> bool {
        true
    }

    fn build_transport(&self, _settings: &DriverSettings<'_>) -> DriverResult<MailTransport> {
        Err(DriverError::fault(std::io::Error::other("no transport")))
    }
}

/// Driver counting how often its fields are requested.
#[derive(Debug, Default)]
pub struct CountingDriver {
    calls: AtomicUsize,
}

impl CountingDriver {
    /// Returns how many times `available_settings` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MailDriver for CountingDriver {
    fn available_settings(&self) -> DriverResult<AvailableSettings> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AvailableSettings::from_names(["api_key"])?)
    }

    fn validate(
        &self,
        _settings: &DriverSettings<'_>,
        _validator: &dyn SettingsValidator,
    ) -> DriverResult<MessageBag> {
        Ok(MessageBag::new())
    }

    fn can_send(&self) -> bool {
        true
    }

    fn build_transport(&self, _settings: &DriverSettings<'_>) -> DriverResult<MailTransport> {
        Ok(MailTransport::Log)
    }
}
