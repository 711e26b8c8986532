//! Pluggable outbound mail drivers.
//!
//! Drivers are registered by name into a [`services::MailDriverRegistry`];
//! registering a name again replaces the earlier driver. A
//! [`services::SettingsView`] derived from the registry lists each driver's
//! configurable fields with their current values from the settings store.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Built-in drivers in [`drivers`]
//! - Settings validation in [`validation`]
//! - Orchestration services in [`services`]

pub mod config;
pub mod domain;
pub mod drivers;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
