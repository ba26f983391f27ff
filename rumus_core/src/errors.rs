//! # Error Types
//!
//! Structured error types for rumus_core. Every failure in the core is
//! recoverable and carries a user-presentable message through `Display`.
//! Errors travel as return values; nothing in the core panics on a
//! well-typed numeric input.
//!
//! ## Example
//!
//! ```rust
//! use rumus_core::errors::{CalcError, CalcResult};
//!
//! fn speed(distance_m: f64, time_s: f64) -> CalcResult<f64> {
//!     if time_s == 0.0 {
//!         return Err(CalcError::division_by_zero("time"));
//!     }
//!     Ok(distance_m / time_s)
//! }
//!
//! assert_eq!(speed(10.0, 0.0).unwrap_err().to_string(), "Time cannot be zero");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rumus_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons a raw text input is rejected by the validator.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Field left blank where a value is required
    #[error("Please enter a value")]
    EmptyInput,

    /// Text is not a floating-point literal
    #[error("Invalid number format")]
    InvalidFormat,

    /// Text parsed to NaN
    #[error("Invalid number")]
    InvalidNumber,

    /// Text parsed to positive or negative infinity
    #[error("Value is too large")]
    ValueTooLarge,

    #[error("Value cannot be negative")]
    NegativeNotAllowed,

    #[error("Value cannot be zero")]
    ZeroNotAllowed,
}

impl ValidationError {
    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "EMPTY_INPUT",
            ValidationError::InvalidFormat => "INVALID_FORMAT",
            ValidationError::InvalidNumber => "INVALID_NUMBER",
            ValidationError::ValueTooLarge => "VALUE_TOO_LARGE",
            ValidationError::NegativeNotAllowed => "NEGATIVE_NOT_ALLOWED",
            ValidationError::ZeroNotAllowed => "ZERO_NOT_ALLOWED",
        }
    }
}

/// A validation failure tied to the input field that produced it.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[error("{field}: {error}")]
pub struct InputError {
    /// Field name as supplied by the caller (e.g., "time")
    pub field: String,
    /// Why the field was rejected
    pub error: ValidationError,
}

impl InputError {
    pub fn new(field: impl Into<String>, error: ValidationError) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }
}

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A guarded divisor (time, area, volume) was zero
    #[error("{} cannot be zero", capitalize(divisor))]
    DivisionByZero { divisor: String },

    /// No formula is registered under this id
    #[error("Formula not found: {id}")]
    FormulaNotFound { id: String },

    /// A quantity the formula needs was not supplied
    #[error("Missing required input for '{formula}': {field}")]
    MissingInput { formula: String, field: String },

    /// One or more raw inputs failed validation
    #[error("Invalid input: {}", join_errors(errors))]
    InvalidInputs { errors: Vec<InputError> },

    /// Settings could not be parsed or hold out-of-range values
    #[error("Settings error: {reason}")]
    Settings { reason: String },
}

impl CalcError {
    /// Create a DivisionByZero error for the named divisor
    pub fn division_by_zero(divisor: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            divisor: divisor.into(),
        }
    }

    /// Create a FormulaNotFound error
    pub fn formula_not_found(id: impl Into<String>) -> Self {
        CalcError::FormulaNotFound { id: id.into() }
    }

    /// Create a MissingInput error
    pub fn missing_input(formula: impl Into<String>, field: impl Into<String>) -> Self {
        CalcError::MissingInput {
            formula: formula.into(),
            field: field.into(),
        }
    }

    /// Create a Settings error
    pub fn settings(reason: impl Into<String>) -> Self {
        CalcError::Settings {
            reason: reason.into(),
        }
    }

    /// Whether the user can fix this by changing their input and retrying
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalcError::Settings { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::FormulaNotFound { .. } => "FORMULA_NOT_FOUND",
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::InvalidInputs { .. } => "INVALID_INPUTS",
            CalcError::Settings { .. } => "SETTINGS_ERROR",
        }
    }
}

impl From<Vec<InputError>> for CalcError {
    fn from(errors: Vec<InputError>) -> Self {
        CalcError::InvalidInputs { errors }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_errors(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::division_by_zero("area");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"type":"DivisionByZero","details":{"divisor":"area"}}"#);

        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(CalcError::division_by_zero("time").to_string(), "Time cannot be zero");
        assert_eq!(CalcError::division_by_zero("volume").to_string(), "Volume cannot be zero");
    }

    #[test]
    fn test_invalid_inputs_message() {
        let error = CalcError::from(vec![
            InputError::new("mass", ValidationError::EmptyInput),
            InputError::new("time", ValidationError::InvalidFormat),
        ]);
        assert_eq!(
            error.to_string(),
            "Invalid input: mass: Please enter a value; time: Invalid number format"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::formula_not_found("x").error_code(), "FORMULA_NOT_FOUND");
        assert_eq!(CalcError::missing_input("force", "mass").error_code(), "MISSING_INPUT");
        assert_eq!(ValidationError::ZeroNotAllowed.error_code(), "ZERO_NOT_ALLOWED");
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::division_by_zero("time").is_recoverable());
        assert!(!CalcError::settings("bad").is_recoverable());
    }
}
