//! Individual field rule checks.
//!
//! Each check is a pure function over one field value. Checks return
//! `Ok(())` on success or the human-readable failure message.

use crate::mail::ports::FieldRule;

/// Applies `rule` to `value` of `field`.
///
/// # Errors
///
/// Returns the failure message when the value violates the rule.
pub fn check(field: &str, value: Option<&str>, rule: &FieldRule) -> Result<(), String> {
    let present = value.map(str::trim).filter(|v| !v.is_empty());

    match (rule, present) {
        (FieldRule::Required, None) => Err(format!("The {field} field is required.")),
        (_, None) | (FieldRule::Required, Some(_)) => Ok(()),
        (FieldRule::Integer, Some(v)) => check_integer(field, v).map(|_| ()),
        (FieldRule::Between { min, max }, Some(v)) => check_between(field, v, *min, *max),
        (FieldRule::OneOf(options), Some(v)) => check_one_of(field, v, options),
        (FieldRule::MaxLength(limit), Some(v)) => check_max_length(field, v, *limit),
    }
}

/// Checks that `value` parses as an integer.
///
/// # Errors
///
/// Returns the failure message when parsing fails.
pub fn check_integer(field: &str, value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .map_err(|_| format!("The {field} must be an integer."))
}

/// Checks that `value` is an integer within `min..=max`.
///
/// # Errors
///
/// Returns the failure message when the value is not an integer or lies
/// outside the range.
pub fn check_between(field: &str, value: &str, min: i64, max: i64) -> Result<(), String> {
    let number = check_integer(field, value)?;
    if (min..=max).contains(&number) {
        Ok(())
    } else {
        Err(format!("The {field} must be between {min} and {max}."))
    }
}

/// Checks that `value` matches one of `options`, ignoring ASCII case.
///
/// # Errors
///
/// Returns the failure message when no option matches.
pub fn check_one_of(field: &str, value: &str, options: &[String]) -> Result<(), String> {
    if options.iter().any(|option| option.eq_ignore_ascii_case(value)) {
        Ok(())
    } else {
        Err(format!("The selected {field} is invalid."))
    }
}

/// Checks that `value` has at most `limit` characters.
///
/// # Errors
///
/// Returns the failure message when the value is too long.
pub fn check_max_length(field: &str, value: &str, limit: usize) -> Result<(), String> {
    if value.chars().count() <= limit {
        Ok(())
    } else {
        Err(format!("The {field} may not be greater than {limit} characters."))
    }
}
