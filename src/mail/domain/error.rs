//! Error types for mail domain validation.

use thiserror::Error;

/// Errors returned while constructing mail domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailDomainError {
    /// The driver name is empty after trimming.
    #[error("mail driver name must not be empty")]
    EmptyDriverName,

    /// The driver name contains characters outside `[A-Za-z0-9_.-]`.
    #[error(
        "mail driver name '{0}' contains invalid characters (only alphanumerics, '_', '.' and '-' allowed)"
    )]
    InvalidDriverName(String),

    /// The driver name exceeds the 100-character limit.
    #[error("mail driver name exceeds 100 character limit: {0}")]
    DriverNameTooLong(String),

    /// A settings field name is empty after trimming.
    #[error("settings field name must not be empty")]
    EmptyFieldName,

    /// A driver declared the same settings field twice.
    #[error("settings field '{0}' is declared more than once")]
    DuplicateField(String),

    /// The SMTP host is missing.
    #[error("SMTP host must not be empty")]
    EmptySmtpHost,

    /// The SMTP port is not an integer in `1..=65535`.
    #[error("SMTP port '{0}' must be an integer between 1 and 65535")]
    InvalidSmtpPort(String),

    /// The SMTP encryption mode is not `tls` or `ssl`.
    #[error("SMTP encryption '{0}' must be 'tls' or 'ssl'")]
    InvalidSmtpEncryption(String),

    /// The sendmail command is empty after trimming.
    #[error("sendmail command must not be empty")]
    EmptySendmailCommand,
}
