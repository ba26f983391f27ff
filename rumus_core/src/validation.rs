//! # Input Validation
//!
//! Converts untrusted text from an input field into a finite `f64`, or a
//! [`ValidationError`] explaining why not. Validation is stateless and runs
//! once per field before every calculation.
//!
//! Checks run in a fixed order:
//!
//! 1. Empty text → accepted as "no value" if `allow_empty`, else `EmptyInput`
//! 2. Parse as a float literal (decimal or exponent form) → `InvalidFormat`
//! 3. NaN → `InvalidNumber`; ±infinity → `ValueTooLarge`
//! 4. Negative without `allow_negative` → `NegativeNotAllowed`
//! 5. Zero without `allow_zero` → `ZeroNotAllowed`
//!
//! ## Example
//!
//! ```rust
//! use rumus_core::validation::{validate_number_input, ValidationOptions};
//! use rumus_core::errors::ValidationError;
//!
//! let opts = ValidationOptions::default();
//! assert_eq!(validate_number_input("1e-3", &opts), Ok(Some(0.001)));
//! assert_eq!(validate_number_input("-2", &opts), Err(ValidationError::NegativeNotAllowed));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{InputError, ValidationError};

/// Which otherwise-valid values a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    pub allow_negative: bool,
    pub allow_zero: bool,
    pub allow_empty: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            allow_negative: false,
            allow_zero: true,
            allow_empty: false,
        }
    }
}

impl ValidationOptions {
    pub fn allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    pub fn allow_zero(mut self, allow: bool) -> Self {
        self.allow_zero = allow;
        self
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }
}

/// Validate one raw input field.
///
/// Returns `Ok(None)` only for empty text with `allow_empty` set; otherwise
/// `Ok(Some(value))` with a finite value satisfying every option.
///
/// Surrounding whitespace is ignored when parsing, but text made only of
/// whitespace is not "empty": it fails with `InvalidFormat`.
pub fn validate_number_input(
    text: &str,
    opts: &ValidationOptions,
) -> Result<Option<f64>, ValidationError> {
    if text.is_empty() {
        return if opts.allow_empty {
            Ok(None)
        } else {
            Err(ValidationError::EmptyInput)
        };
    }

    let value: f64 = text.trim().parse().map_err(|_| ValidationError::InvalidFormat)?;

    if value.is_nan() {
        return Err(ValidationError::InvalidNumber);
    }
    if value.is_infinite() {
        return Err(ValidationError::ValueTooLarge);
    }
    if !opts.allow_negative && value < 0.0 {
        return Err(ValidationError::NegativeNotAllowed);
    }
    if !opts.allow_zero && value == 0.0 {
        return Err(ValidationError::ZeroNotAllowed);
    }

    Ok(Some(value))
}

/// Validate a required field, so an empty value is always an error.
pub fn validate_required(text: &str, opts: &ValidationOptions) -> Result<f64, ValidationError> {
    let opts = opts.allow_empty(false);
    validate_number_input(text, &opts)?.ok_or(ValidationError::EmptyInput)
}

/// Validate a batch of named fields at once.
///
/// Negative values are allowed, since physical quantities such as
/// displacement or velocity can be signed. Every field is checked; on failure
/// the full list of rejections is returned, in field order.
pub fn validate_inputs<'a, I>(fields: I) -> Result<BTreeMap<String, f64>, Vec<InputError>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let opts = ValidationOptions::default().allow_negative(true);
    let mut validated = BTreeMap::new();
    let mut errors = Vec::new();

    for (name, text) in fields {
        match validate_required(text, &opts) {
            Ok(value) => {
                validated.insert(name.to_string(), value);
            }
            Err(error) => {
                tracing::debug!(field = name, %error, "Input rejected");
                errors.push(InputError::new(name, error));
            }
        }
    }

    if errors.is_empty() {
        Ok(validated)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ValidationOptions {
        ValidationOptions::default()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate_number_input("", &defaults()), Err(ValidationError::EmptyInput));
        assert_eq!(validate_number_input("", &defaults().allow_empty(true)), Ok(None));
    }

    #[test]
    fn test_whitespace_only_is_invalid_format() {
        assert_eq!(validate_number_input("   ", &defaults()), Err(ValidationError::InvalidFormat));
        assert_eq!(
            validate_number_input("   ", &defaults().allow_empty(true)),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_forms() {
        let opts = defaults();
        assert_eq!(validate_number_input("42", &opts), Ok(Some(42.0)));
        assert_eq!(validate_number_input("3.5", &opts), Ok(Some(3.5)));
        assert_eq!(validate_number_input(" 7 ", &opts), Ok(Some(7.0)));
        assert_eq!(validate_number_input("1e-3", &opts), Ok(Some(0.001)));
        assert_eq!(validate_number_input("2.5E3", &opts), Ok(Some(2500.0)));
        assert_eq!(validate_number_input(".5", &opts), Ok(Some(0.5)));
    }

    #[test]
    fn test_invalid_format() {
        for text in ["abc", "1,5", "1.2.3", "5 kg", "e5", "--1"] {
            assert_eq!(
                validate_number_input(text, &defaults()),
                Err(ValidationError::InvalidFormat),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_nan_and_infinity() {
        assert_eq!(validate_number_input("NaN", &defaults()), Err(ValidationError::InvalidNumber));
        assert_eq!(validate_number_input("inf", &defaults()), Err(ValidationError::ValueTooLarge));
        assert_eq!(
            validate_number_input("-infinity", &defaults().allow_negative(true)),
            Err(ValidationError::ValueTooLarge)
        );
        // Overflowing literal parses to infinity
        assert_eq!(
            validate_number_input("1e400", &defaults()),
            Err(ValidationError::ValueTooLarge)
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(
            validate_number_input("-1", &defaults()),
            Err(ValidationError::NegativeNotAllowed)
        );
        assert_eq!(validate_number_input("-1", &defaults().allow_negative(true)), Ok(Some(-1.0)));
    }

    #[test]
    fn test_zero() {
        assert_eq!(validate_number_input("0", &defaults()), Ok(Some(0.0)));
        assert_eq!(
            validate_number_input("0", &defaults().allow_zero(false)),
            Err(ValidationError::ZeroNotAllowed)
        );
        assert_eq!(
            validate_number_input("-0.0", &defaults().allow_negative(true).allow_zero(false)),
            Err(ValidationError::ZeroNotAllowed)
        );
    }

    #[test]
    fn test_negative_checked_before_zero() {
        let opts = defaults().allow_zero(false);
        assert_eq!(validate_number_input("-3", &opts), Err(ValidationError::NegativeNotAllowed));
    }

    #[test]
    fn test_validate_required() {
        let opts = defaults().allow_empty(true);
        assert_eq!(validate_required("", &opts), Err(ValidationError::EmptyInput));
        assert_eq!(validate_required("2", &opts), Ok(2.0));
    }

    #[test]
    fn test_validate_inputs_ok() {
        let values = validate_inputs([("mass", "5"), ("velocity", "-3")]).unwrap();
        assert_eq!(values["mass"], 5.0);
        assert_eq!(values["velocity"], -3.0);
    }

    #[test]
    fn test_validate_inputs_collects_all_errors() {
        let errors =
            validate_inputs([("mass", ""), ("velocity", "fast"), ("time", "2")]).unwrap_err();
        assert_eq!(
            errors,
            vec![
                InputError::new("mass", ValidationError::EmptyInput),
                InputError::new("velocity", ValidationError::InvalidFormat),
            ]
        );
    }
}
