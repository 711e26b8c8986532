//! Key-value settings store used by the mail subsystem.
//!
//! Settings are opaque string values addressed by a validated
//! [`domain::SettingKey`]. The store itself is a port so that hosts can back
//! it with whatever persistence they already have; an in-memory adapter is
//! provided for tests and embedded use.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
