//! Error types for settings key validation.

use thiserror::Error;

/// Errors returned while constructing settings domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsDomainError {
    /// The key is empty after trimming.
    #[error("setting key must not be empty")]
    EmptyKey,

    /// The key contains characters outside `[A-Za-z0-9_.-]`.
    #[error(
        "setting key '{0}' contains invalid characters (only alphanumeric, '_', '.' and '-' allowed)"
    )]
    InvalidKey(String),

    /// The key exceeds the 100-character storage limit.
    #[error("setting key exceeds 100 character limit: {0}")]
    KeyTooLong(String),
}
