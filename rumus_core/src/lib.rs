//! # rumus_core - Physics Formula Engine
//!
//! `rumus_core` is the non-UI heart of Rumus, a junior-high physics
//! reference and calculator. It holds the formula catalog, the calculator
//! engine, input validation, and result formatting. All inputs and outputs
//! are plain data and JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The catalog is read-only and formulas are pure functions
//! - **Typed**: Formulas are a closed enum, each with its own typed inputs
//! - **Errors as values**: Every failure is a `Result`, never a panic
//!
//! ## Quick Start
//!
//! ```rust
//! use rumus_core::{format_result, velocity, FormatOptions};
//!
//! let v = velocity(100.0, 5.0).ok();
//! assert_eq!(format_result(v, "m/s", &FormatOptions::default()), "20 m/s");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Read-only formula lookup by id and category
//! - [`formulas`] - Formula functions and the metadata registry
//! - [`validation`] - Raw text → validated number
//! - [`calculator`] - Request/result types tying the pipeline together
//! - [`format`] - Result → display text
//! - [`cache`] - Optional memoization of formula results
//! - [`settings`] - Formatter, gravity, and cache settings
//! - [`units`] - The two supported unit conversions (m/cm, kg/g)
//! - [`errors`] - Structured error types

pub mod cache;
pub mod calculator;
pub mod catalog;
pub mod errors;
pub mod format;
pub mod formulas;
pub mod settings;
pub mod units;
pub mod validation;

mod proptests;

// Re-export commonly used types at crate root for convenience
pub use calculator::{evaluate, CalculationRequest, CalculationResult, Calculator, FormulaInput};
pub use catalog::{Catalog, CATALOG};
pub use errors::{CalcError, CalcResult, InputError, ValidationError};
pub use format::{format_result, format_value, FormatOptions, MAX_PRECISION};
pub use formulas::mechanics::{
    acceleration, density, force, kinetic_energy, momentum, potential_energy, power, pressure,
    velocity, work,
};
pub use formulas::registry::{Formula, FormulaSpec, FormulaVariable};
pub use settings::Settings;
pub use validation::{validate_inputs, validate_number_input, ValidationOptions};
