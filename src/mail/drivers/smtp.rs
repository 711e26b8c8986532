//! SMTP relay driver.

use crate::mail::{
    domain::{
        AvailableSettings, MailDomainError, MailTransport, MessageBag, SmtpEncryption,
        SmtpTransportConfig,
    },
    ports::{
        DriverResult, DriverSettings, FieldRule, FieldRules, MailDriver, SettingsValidator,
    },
};

const HOST: &str = "mail_host";
const PORT: &str = "mail_port";
const ENCRYPTION: &str = "mail_encryption";
const USERNAME: &str = "mail_username";
const PASSWORD: &str = "mail_password";

/// Delivers mail through an SMTP relay.
///
/// Fields: `mail_host` (required), `mail_port`, `mail_encryption` (`tls` or
/// `ssl`), `mail_username` and `mail_password`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpDriver;

impl SmtpDriver {
    /// Name the driver is registered under by default.
    pub const NAME: &'static str = "smtp";

    /// Creates the driver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn rules() -> Vec<FieldRules> {
        vec![
            FieldRules::new(HOST).rule(FieldRule::Required),
            FieldRules::new(PORT)
                .rule(FieldRule::Integer)
                .rule(FieldRule::Between { min: 1, max: 65535 }),
            FieldRules::new(ENCRYPTION).rule(FieldRule::OneOf(vec![
                SmtpEncryption::Tls.as_str().to_owned(),
                SmtpEncryption::Ssl.as_str().to_owned(),
            ])),
        ]
    }
}

fn parse_port(raw: &str) -> Result<u16, MailDomainError> {
    raw.parse::<u16>()
        .map_err(|_| MailDomainError::InvalidSmtpPort(raw.to_owned()))
}

impl MailDriver for SmtpDriver {
    fn available_settings(&self) -> DriverResult<AvailableSettings> {
        Ok(AvailableSettings::from_names([
            HOST, PORT, ENCRYPTION, USERNAME, PASSWORD,
        ])?)
    }

    fn validate(
        &self,
        settings: &DriverSettings<'_>,
        validator: &dyn SettingsValidator,
    ) -> DriverResult<MessageBag> {
        let input = settings.resolve(&self.available_settings()?)?;
        Ok(validator.validate(&input, &Self::rules()))
    }

    fn can_send(&self) -> bool {
        true
    }

    fn build_transport(&self, settings: &DriverSettings<'_>) -> DriverResult<MailTransport> {
        let host = settings.get_non_empty(HOST)?.unwrap_or_default();
        let mut config = SmtpTransportConfig::new(host)?;

        if let Some(port) = settings.get_non_empty(PORT)? {
            config = config.with_port(parse_port(&port)?)?;
        }
        if let Some(encryption) = settings.get_non_empty(ENCRYPTION)? {
            config = config.with_encryption(SmtpEncryption::try_from(encryption.as_str())?);
        }
        if let Some(username) = settings.get_non_empty(USERNAME)? {
            let password = settings.get(PASSWORD)?.unwrap_or_default();
            config = config.with_credentials(username, password);
        }

        Ok(MailTransport::Smtp(config))
    }
}
