//! Validator port for driver settings.

use crate::mail::domain::{DriverFields, MessageBag};

/// A single constraint on a settings field.
///
/// Absent and empty values satisfy every rule except [`FieldRule::Required`],
/// so optional fields only need to be checked once they are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// The field must hold a non-blank value.
    Required,
    /// The value must parse as a base-10 integer.
    Integer,
    /// The value must be an integer within `min..=max`.
    Between {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// The value must equal one of the listed options, ignoring ASCII case.
    OneOf(Vec<String>),
    /// The value must not exceed the given number of characters.
    MaxLength(usize),
}

/// The rules applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    field: String,
    rules: Vec<FieldRule>,
}

impl FieldRules {
    /// Starts a rule list for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}

/// Port for checking resolved settings against field rules.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect every failure rather than stopping at the first
/// - Key messages by field name
/// - Be stateless and thread-safe
pub trait SettingsValidator: Send + Sync {
    /// Checks `input` against `rules`, returning one message per failure.
    fn validate(&self, input: &DriverFields, rules: &[FieldRules]) -> MessageBag;
}
