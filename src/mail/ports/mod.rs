//! Port contracts for the mail driver subsystem.
//!
//! [`MailDriver`] is the capability set every pluggable driver implements.
//! Drivers read their configuration through [`DriverSettings`], a view of
//! the settings store scoped to one registered driver, and delegate field
//! checks to a [`SettingsValidator`].

mod driver;
mod settings_scope;
mod validator;

pub use driver::{DriverError, DriverFault, DriverResult, MailDriver};
pub use settings_scope::{DriverSettings, SettingKeyScheme};
pub use validator::{FieldRule, FieldRules, SettingsValidator};
