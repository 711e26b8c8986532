//! Configuration for the mail settings service.

use crate::mail::ports::SettingKeyScheme;
use serde::{Deserialize, Serialize};

/// Settings key that selects the active driver unless configured otherwise.
const DEFAULT_DRIVER_SETTING: &str = "mail_driver";

/// Driver used when the settings store names none.
const DEFAULT_DRIVER: &str = "smtp";

/// Configuration for [`crate::mail::services::MailSettingsService`].
///
/// # Examples
///
/// ```
/// use mailroom::mail::config::MailConfig;
/// use mailroom::mail::ports::SettingKeyScheme;
///
/// let config = MailConfig::default();
/// assert_eq!(config.key_scheme, SettingKeyScheme::Namespaced);
/// assert_eq!(config.driver_setting, "mail_driver");
///
/// let flat = MailConfig::flat();
/// assert_eq!(flat.key_scheme, SettingKeyScheme::Flat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// How driver fields map onto settings keys.
    pub key_scheme: SettingKeyScheme,
    /// Settings key holding the name of the active driver.
    pub driver_setting: String,
    /// Driver name used when the active-driver setting is absent or blank.
    pub default_driver: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            key_scheme: SettingKeyScheme::Namespaced,
            driver_setting: DEFAULT_DRIVER_SETTING.to_owned(),
            default_driver: DEFAULT_DRIVER.to_owned(),
        }
    }
}

impl MailConfig {
    /// Creates a configuration where every driver reads bare field names.
    ///
    /// Matches hosts whose settings table stores `mail_host` rather than
    /// `smtp.mail_host`.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            key_scheme: SettingKeyScheme::Flat,
            ..Self::default()
        }
    }
}
