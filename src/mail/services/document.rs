//! Serialisable mail settings payloads.

use super::SettingsView;
use crate::mail::domain::MessageBag;
use serde::{Serialize, Serializer};

const RESOURCE_TYPE: &str = "mail-settings";
const RESOURCE_ID: &str = "global";

/// Everything an administrator needs to configure outbound mail.
#[derive(Debug, Clone, Serialize)]
pub struct MailSettings {
    fields: SettingsView,
    sending: bool,
    errors: MessageBag,
}

impl MailSettings {
    /// Bundles the settings view with the active driver's status.
    #[must_use]
    pub const fn new(fields: SettingsView, sending: bool, errors: MessageBag) -> Self {
        Self {
            fields,
            sending,
            errors,
        }
    }

    /// Returns the settings of every registered driver.
    #[must_use]
    pub const fn fields(&self) -> &SettingsView {
        &self.fields
    }

    /// Returns whether mail currently leaves the system.
    #[must_use]
    pub const fn sending(&self) -> bool {
        self.sending
    }

    /// Returns the active driver's validation problems.
    #[must_use]
    pub const fn errors(&self) -> &MessageBag {
        &self.errors
    }
}

/// [`MailSettings`] wrapped as a single API resource.
///
/// Serialises as
/// `{"data":{"type":"mail-settings","id":"global","attributes":{...}}}`.
#[derive(Debug, Clone)]
pub struct MailSettingsDocument {
    settings: MailSettings,
}

impl MailSettingsDocument {
    /// Wraps `settings`.
    #[must_use]
    pub const fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    /// Returns the wrapped settings.
    #[must_use]
    pub const fn settings(&self) -> &MailSettings {
        &self.settings
    }

    /// Converts the document into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialisation fails.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    data: Resource<'a>,
}

#[derive(Serialize)]
struct Resource<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'static str,
    attributes: &'a MailSettings,
}

impl Serialize for MailSettingsDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            data: Resource {
                kind: RESOURCE_TYPE,
                id: RESOURCE_ID,
                attributes: &self.settings,
            },
        }
        .serialize(serializer)
    }
}
