//! # Result Formatting
//!
//! Renders a computed value and its unit as display text.
//!
//! | Value | Output |
//! |-------|--------|
//! | absent | `-- {unit}` |
//! | NaN | `NaN {unit}` |
//! | ±∞ | `∞ {unit}` / `-∞ {unit}` |
//! | 0 | `0 {unit}` |
//! | \|v\| < threshold or \|v\| ≥ 1/threshold | scientific, e.g. `1.23e-05 {unit}` |
//! | otherwise | fixed-point, trailing zeros stripped, e.g. `12.5 {unit}` |
//!
//! Fixed-point output gets a `,` thousands separator from 10,000 upward. With
//! the default threshold of `1e-4` that range is already scientific, so the
//! separator only appears with a smaller threshold.
//!
//! ## Example
//!
//! ```rust
//! use rumus_core::format::{format_result, FormatOptions};
//!
//! let opts = FormatOptions::default();
//! assert_eq!(format_result(Some(20.0), "m/s", &opts), "20 m/s");
//! assert_eq!(format_result(Some(0.00001234), "m", &opts), "1.23e-05 m");
//! assert_eq!(format_result(None, "N", &opts), "-- N");
//! ```

use serde::{Deserialize, Serialize};

/// Largest precision that still means something for an f64; larger values are clamped
pub const MAX_PRECISION: usize = 17;

/// Formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits after the decimal point, in both notations (at most [`MAX_PRECISION`])
    pub precision: usize,
    /// Magnitudes below this (or at/above its reciprocal) use scientific notation
    pub scientific_threshold: f64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            precision: 2,
            scientific_threshold: 1e-4,
        }
    }
}

impl FormatOptions {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_scientific_threshold(mut self, threshold: f64) -> Self {
        self.scientific_threshold = threshold;
        self
    }
}

/// Format an optional value with its unit.
pub fn format_result(value: Option<f64>, unit: &str, opts: &FormatOptions) -> String {
    match value {
        Some(v) => format_value(v, unit, opts),
        None => format!("-- {unit}"),
    }
}

/// Format a value with its unit.
pub fn format_value(value: f64, unit: &str, opts: &FormatOptions) -> String {
    if value.is_nan() {
        return format!("NaN {unit}");
    }
    if value.is_infinite() {
        return if value > 0.0 {
            format!("∞ {unit}")
        } else {
            format!("-∞ {unit}")
        };
    }
    if value == 0.0 {
        return format!("0 {unit}");
    }

    let precision = opts.precision.min(MAX_PRECISION);
    let abs_value = value.abs();
    let threshold = opts.scientific_threshold;

    let formatted = if abs_value < threshold || abs_value >= 1.0 / threshold {
        format_scientific(value, precision)
    } else {
        let fixed = if abs_value >= 10_000.0 {
            group_thousands(&format!("{:.*}", precision, value))
        } else {
            format!("{:.*}", precision, value)
        };
        strip_trailing_zeros(fixed)
    };

    format!("{formatted} {unit}")
}

/// Scientific notation with a signed, at least two-digit exponent (`1.23e-05`, `4.56e+07`).
fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

/// Insert `,` every three digits in the integer part of a fixed-point string.
fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `12.50` → `12.5`, `12.00` → `12`. Strings without a decimal point are untouched.
fn strip_trailing_zeros(fixed: String) -> String {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Round to a number of significant digits.
///
/// Zero and non-finite values are returned unchanged.
///
/// ```rust
/// use rumus_core::format::round_to_significant;
///
/// assert!((round_to_significant(123456.0, 3) - 123000.0).abs() < 1e-6);
/// assert_eq!(round_to_significant(0.0012345, 2), 0.0012);
/// ```
pub fn round_to_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(digits as i32 - 1 - magnitude);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64, unit: &str) -> String {
        format_value(value, unit, &FormatOptions::default())
    }

    #[test]
    fn test_special_values() {
        let opts = FormatOptions::default();
        assert_eq!(format_result(None, "m/s", &opts), "-- m/s");
        assert_eq!(fmt(f64::NAN, "J"), "NaN J");
        assert_eq!(fmt(f64::INFINITY, "J"), "∞ J");
        assert_eq!(fmt(f64::NEG_INFINITY, "J"), "-∞ J");
        assert_eq!(fmt(0.0, "N"), "0 N");
        assert_eq!(fmt(-0.0, "N"), "0 N");
    }

    #[test]
    fn test_fixed_point_strips_zeros() {
        assert_eq!(fmt(20.0, "m/s"), "20 m/s");
        assert_eq!(fmt(15.0, "N"), "15 N");
        assert_eq!(fmt(12.50, "N"), "12.5 N");
        assert_eq!(fmt(12.346, "N"), "12.35 N");
        assert_eq!(fmt(58.800000000000004, "J"), "58.8 J");
        assert_eq!(fmt(-7.25, "m/s²"), "-7.25 m/s²");
        assert_eq!(fmt(9999.0, "Pa"), "9999 Pa");
    }

    #[test]
    fn test_rounds_to_zero_keeps_sign() {
        // Above the threshold but below the display precision
        assert_eq!(fmt(0.001, "m"), "0 m");
        assert_eq!(fmt(-0.001, "m"), "-0 m");
    }

    #[test]
    fn test_scientific_small() {
        assert_eq!(fmt(0.00001234, "m"), "1.23e-05 m");
        assert_eq!(fmt(-0.00005, "C"), "-5.00e-05 C");
    }

    #[test]
    fn test_oversized_precision_is_clamped() {
        let huge = FormatOptions::default().with_precision(70_000);
        let max = FormatOptions::default().with_precision(MAX_PRECISION);
        assert_eq!(format_value(1.5, "m", &huge), "1.5 m");
        assert_eq!(format_value(0.00001234, "m", &huge), format_value(0.00001234, "m", &max));
        assert_eq!(format_value(2.5e7, "J", &huge), format_value(2.5e7, "J", &max));
    }

    #[test]
    fn test_scientific_large() {
        assert_eq!(fmt(10000.0, "Pa"), "1.00e+04 Pa");
        assert_eq!(fmt(30000.0, "kg·m/s"), "3.00e+04 kg·m/s");
        assert_eq!(fmt(6.02e23, "mol"), "6.02e+23 mol");
        assert_eq!(fmt(1.5e-100, "m"), "1.50e-100 m");
    }

    #[test]
    fn test_threshold_boundaries() {
        // Exactly at the threshold is fixed-point, exactly at the reciprocal is scientific
        assert_eq!(fmt(0.0001, "m"), "0 m");
        assert_eq!(fmt(9999.994, "m"), "9999.99 m");
    }

    #[test]
    fn test_thousands_separator() {
        let opts = FormatOptions::default().with_scientific_threshold(1e-6);
        assert_eq!(format_value(10000.0, "Pa", &opts), "10,000 Pa");
        assert_eq!(format_value(1234567.5, "Pa", &opts), "1.23e+06 Pa");
        assert_eq!(format_value(123456.75, "J", &opts), "123,456.75 J");
        assert_eq!(format_value(-98765.4, "J", &opts), "-98,765.4 J");
    }

    #[test]
    fn test_precision() {
        let opts = FormatOptions::default().with_precision(4);
        assert_eq!(format_value(3.14159265, "rad", &opts), "3.1416 rad");
        assert_eq!(format_value(0.00012345, "m", &opts), "0.0001 m");

        let opts = FormatOptions::default().with_precision(0);
        assert_eq!(format_value(100.0, "N", &opts), "100 N");
        assert_eq!(format_value(12345.0, "N", &opts), "1e+04 N");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1000.00"), "1,000.00");
        assert_eq!(group_thousands("100000"), "100,000");
        assert_eq!(group_thousands("-1234567.89"), "-1,234,567.89");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn test_round_to_significant() {
        assert_eq!(round_to_significant(0.0, 3), 0.0);
        assert!((round_to_significant(123456.0, 3) - 123000.0).abs() < 1e-6);
        assert_eq!(round_to_significant(-98.765, 2), -99.0);
        assert!((round_to_significant(1.23456, 3) - 1.23).abs() < 1e-12);
        assert!(round_to_significant(f64::NAN, 3).is_nan());
    }
}
