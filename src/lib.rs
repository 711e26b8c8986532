//! Mailroom: pluggable outbound mail drivers for forum platforms.
//!
//! This crate provides a registry of named mail drivers, where extensions
//! may add new drivers or replace existing ones, and derives the settings
//! view an administration interface shows for every registered driver.
//!
//! # Architecture
//!
//! Mailroom follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`mail`]: Driver registry, settings view and built-in drivers
//! - [`settings`]: Key-value settings store port and in-memory adapter

pub mod mail;
pub mod settings;
