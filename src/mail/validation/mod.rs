//! Settings validation implementation.
//!
//! This module provides the default implementation of settings validation:
//! individual rule checks and the composite validator service.

pub mod rules;
pub mod service;

pub use service::RuleValidator;
