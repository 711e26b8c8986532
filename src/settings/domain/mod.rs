//! Domain model for settings keys.

mod error;
mod key;

pub use error::SettingsDomainError;
pub use key::SettingKey;
