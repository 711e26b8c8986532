//! Unit tests for the mail module.
//!
//! Tests are organised by layer, covering the registry's override
//! semantics, settings view derivation, validation and the settings
//! service.

mod support;
