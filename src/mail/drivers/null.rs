//! Driver that discards mail.

use crate::mail::{
    domain::{AvailableSettings, MailTransport, MessageBag},
    ports::{DriverResult, DriverSettings, MailDriver, SettingsValidator},
};

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDriver;

impl NullDriver {
    /// Name the driver is conventionally registered under.
    pub const NAME: &'static str = "null";

    /// Creates the driver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MailDriver for NullDriver {
    fn available_settings(&self) -> DriverResult<AvailableSettings> {
        Ok(AvailableSettings::none())
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
