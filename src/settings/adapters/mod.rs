//! Adapter implementations for the settings store port.

pub mod memory;
