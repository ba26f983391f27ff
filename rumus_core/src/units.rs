//! # Unit Types
//!
//! Lightweight newtype wrappers for the only two unit conversions the
//! calculator supports: length (m ↔ cm) and mass (kg ↔ g). Everything else
//! is computed in SI base units and never converted.
//!
//! ## Example
//!
//! ```rust
//! use rumus_core::units::{Centimeters, Meters};
//!
//! let height = Meters(1.5);
//! let height_cm: Centimeters = height.into();
//! assert_eq!(height_cm.0, 150.0);
//! ```

use serde::{Deserialize, Serialize};

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * CM_PER_M)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / CM_PER_M)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * G_PER_KG)
    }
}

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / G_PER_KG)
    }
}

// ============================================================================
// String-keyed conversion
// ============================================================================

/// Convert `value` between two unit symbols.
///
/// Only `m`/`cm` and `kg`/`g` pairs are known. Any other pair, including a
/// unit converted to itself, returns `value` unchanged.
///
/// # Example
///
/// ```rust
/// use rumus_core::units::convert_units;
///
/// assert_eq!(convert_units(2.5, "kg", "g"), 2500.0);
/// assert_eq!(convert_units(42.0, "s", "min"), 42.0);
/// ```
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    match (from_unit, to_unit) {
        ("m", "cm") => Centimeters::from(Meters(value)).0,
        ("cm", "m") => Meters::from(Centimeters(value)).0,
        ("kg", "g") => Grams::from(Kilograms(value)).0,
        ("g", "kg") => Kilograms::from(Grams(value)).0,
        _ => value,
    }
}
