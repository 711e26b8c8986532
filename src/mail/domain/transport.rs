//! Mail transport descriptors produced by drivers.

use super::MailDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Port used when an SMTP driver is configured without one.
const DEFAULT_SMTP_PORT: u16 = 25;

/// Command used by the sendmail transport unless overridden.
const DEFAULT_SENDMAIL_COMMAND: &str = "/usr/sbin/sendmail -bs";

/// Encryption negotiated with an SMTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmtpEncryption {
    /// Upgrade a plain connection with STARTTLS.
    Tls,
    /// Connect over implicit TLS.
    Ssl,
}

impl SmtpEncryption {
    /// Returns the canonical settings representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tls => "tls",
            Self::Ssl => "ssl",
        }
    }
}

impl fmt::Display for SmtpEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SmtpEncryption {
    type Error = MailDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tls" => Ok(Self::Tls),
            "ssl" => Ok(Self::Ssl),
            _ => Err(MailDomainError::InvalidSmtpEncryption(value.to_owned())),
        }
    }
}

/// Connection settings for delivery through an SMTP relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpTransportConfig {
    host: String,
    port: u16,
    encryption: Option<SmtpEncryption>,
    username: Option<String>,
    password: Option<String>,
}

impl SmtpTransportConfig {
    /// Creates an SMTP configuration on port 25 without encryption or
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::EmptySmtpHost`] when `host` is blank.
    pub fn new(host: impl Into<String>) -> Result<Self, MailDomainError> {
        let normalized_host = host.into().trim().to_owned();
        if normalized_host.is_empty() {
            return Err(MailDomainError::EmptySmtpHost);
        }

        Ok(Self {
            host: normalized_host,
            port: DEFAULT_SMTP_PORT,
            encryption: None,
            username: None,
            password: None,
        })
    }

    /// Sets the server port.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::InvalidSmtpPort`] for port `0`.
    pub fn with_port(mut self, port: u16) -> Result<Self, MailDomainError> {
        if port == 0 {
            return Err(MailDomainError::InvalidSmtpPort(port.to_string()));
        }
        self.port = port;
        Ok(self)
    }

    /// Sets the encryption mode.
    #[must_use]
    pub const fn with_encryption(mut self, encryption: SmtpEncryption) -> Self {
        self.encryption = Some(encryption);
        self
    }

    /// Sets the authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Returns the server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the encryption mode, if any.
    #[must_use]
    pub const fn encryption(&self) -> Option<SmtpEncryption> {
        self.encryption
    }

    /// Returns the authentication username, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the authentication password, if any.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

/// Settings for piping mail into a local sendmail binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendmailTransportConfig {
    command: String,
}

impl SendmailTransportConfig {
    /// Creates a sendmail configuration with an explicit command line.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::EmptySendmailCommand`] when `command` is
    /// blank.
    pub fn new(command: impl Into<String>) -> Result<Self, MailDomainError> {
        let normalized = command.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(MailDomainError::EmptySendmailCommand);
        }
        Ok(Self {
            command: normalized,
        })
    }

    /// Returns the command line.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for SendmailTransportConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_SENDMAIL_COMMAND.to_owned(),
        }
    }
}

/// Describes how outgoing mail leaves the system.
///
/// Drivers build one of these from their settings; the component that
/// actually delivers mail interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "config")]
pub enum MailTransport {
    /// Deliver through an SMTP relay.
    Smtp(SmtpTransportConfig),
    /// Hand mail to a local sendmail binary.
    Sendmail(SendmailTransportConfig),
    /// Write mail to the application log instead of sending it.
    Log,
    /// Discard mail.
    Null,
}

impl MailTransport {
    /// Returns `true` when mail handed to this transport is discarded.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the transport kind as used in serialised descriptors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Smtp(_) => "smtp",
            Self::Sendmail(_) => "sendmail",
            Self::Log => "log",
            Self::Null => "null",
        }
    }
}
