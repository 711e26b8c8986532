//! Validated mail driver name type.

use super::MailDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a driver name.
const MAX_NAME_LENGTH: usize = 100;

/// Validated, case-sensitive driver identifier.
///
/// Driver names key the driver registry (e.g. `smtp`, `mail`, `log`) and
/// prefix the driver's settings keys, so they are limited to characters a
/// settings key accepts: `[A-Za-z0-9_.-]`. Case is significant; `Custom` and
/// `custom` are different drivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DriverName(String);

impl DriverName {
    /// Creates a validated driver name.
    ///
    /// Surrounding whitespace is trimmed; case is kept.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::EmptyDriverName`] when the value is empty
    /// after trimming, [`MailDomainError::InvalidDriverName`] when it contains
    /// characters outside `[A-Za-z0-9_.-]`, or
    /// [`MailDomainError::DriverNameTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, MailDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(MailDomainError::EmptyDriverName);
        }

        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(MailDomainError::DriverNameTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

        if !is_valid {
            return Err(MailDomainError::InvalidDriverName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a compile-time constant name that is already valid.
    pub(crate) fn builtin(name: &'static str) -> Self {
        Self(name.to_owned())
    }

    /// Returns the driver name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DriverName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DriverName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DriverName {
    type Error = MailDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DriverName> for String {
    fn from(value: DriverName) -> Self {
        value.0
    }
}
