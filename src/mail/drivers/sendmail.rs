//! Local sendmail driver.

use crate::mail::{
    domain::{AvailableSettings, MailTransport, MessageBag, SendmailTransportConfig},
    ports::{DriverResult, DriverSettings, MailDriver, SettingsValidator},
};

/// Hands mail to the local sendmail binary. Needs no configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendmailDriver {
    config: SendmailTransportConfig,
}

impl SendmailDriver {
    /// Name the driver is conventionally registered under.
    pub const NAME: &'static str = "mail";

    /// Creates the driver with the default sendmail command line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the driver with an explicit sendmail configuration.
    #[must_use]
    pub const fn with_config(config: SendmailTransportConfig) -> Self {
        Self { config }
    }
}

impl MailDriver for SendmailDriver {
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
        true
    }

    fn build_transport(&self, _settings: &DriverSettings<'_>) -> DriverResult<MailTransport> {
        Ok(MailTransport::Sendmail(self.config.clone()))
    }
}
