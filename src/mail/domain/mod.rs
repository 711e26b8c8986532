//! Domain model for pluggable mail drivers.
//!
//! Drivers are identified by a [`DriverName`], declare the settings fields
//! they understand through [`AvailableSettings`], report validation problems
//! in a [`MessageBag`], and describe how mail would leave the system with a
//! [`MailTransport`]. Nothing in here touches the settings store.

mod error;
mod fields;
mod message_bag;
mod name;
mod transport;

pub use error::MailDomainError;
pub use fields::{AvailableSettings, DriverFields, SettingField};
pub use message_bag::MessageBag;
pub use name::DriverName;
pub use transport::{MailTransport, SendmailTransportConfig, SmtpEncryption, SmtpTransportConfig};
