//! Application services for mail driver registration and settings.

mod document;
mod extender;
mod mail_settings;
mod registry;
mod view;

pub use document::{MailSettings, MailSettingsDocument};
pub use extender::MailExtender;
pub use mail_settings::{MailSettingsError, MailSettingsResult, MailSettingsService};
pub use registry::{MailDriverRegistry, RegisteredDriver};
pub use view::{SettingsView, SettingsViewBuilder, build_view};
