//! Driver that writes mail to the application log.

use crate::mail::{
    domain::{AvailableSettings, MailTransport, MessageBag},
    ports::{DriverResult, DriverSettings, MailDriver, SettingsValidator},
};

/// Records mail in the log instead of sending it. Useful in development.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDriver;

impl LogDriver {
    /// Name the driver is conventionally registered under.
    pub const NAME: &'static str = "log";

    /// Creates the driver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MailDriver for LogDriver {
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
        Ok(MailTransport::Log)
    }
}
