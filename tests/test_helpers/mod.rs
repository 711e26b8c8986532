//! Shared drivers for integration tests.

use mailroom::mail::{
    domain::{AvailableSettings, MailTransport, MessageBag},
    ports::{DriverResult, DriverSettings, MailDriver, SettingsValidator},
};

/// Extension driver exposing one field, `customSetting1`, that never sends.
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
