//! Port contracts for the settings store.

pub mod repository;

pub use repository::{SettingsRepository, SettingsRepositoryError, SettingsResult};

#[cfg(test)]
pub use repository::MockSettingsRepository;
