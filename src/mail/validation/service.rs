//! Validation service implementation.
//!
//! Provides the default implementation of the `SettingsValidator` port.

use crate::mail::{
    domain::{DriverFields, MessageBag},
    ports::{FieldRules, SettingsValidator},
    validation::rules,
};

/// Default settings validator.
///
/// Applies every rule of every field in order and collects all failures,
/// so a settings screen can show each problem at once.
///
/// # Examples
///
/// ```
/// use mailroom::mail::domain::DriverFields;
/// use mailroom::mail::ports::{FieldRule, FieldRules, SettingsValidator};
/// use mailroom::mail::validation::RuleValidator;
///
/// let input: DriverFields = [("mail_port", "abc")].into_iter().collect();
/// let rules = [FieldRules::new("mail_port").rule(FieldRule::Integer)];
///
/// let errors = RuleValidator::new().validate(&input, &rules);
/// assert!(errors.has("mail_port"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SettingsValidator for RuleValidator {
    fn validate(&self, input: &DriverFields, checks: &[FieldRules]) -> MessageBag {
        let mut errors = MessageBag::new();

        for field_rules in checks {
            let field = field_rules.field();
            let value = input.get(field);
            for rule in field_rules.rules() {
                if let Err(message) = rules::check(field, value, rule) {
                    errors.add(field, message);
                }
            }
        }

        errors
    }
}
