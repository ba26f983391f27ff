//! # Physics Formulas
//!
//! The formulas the calculator supports, kept in one place so every
//! implementation can be checked against its catalog entry.
//!
//! ## Modules
//!
//! - [`mechanics`] - Pure evaluation functions, one per formula
//! - [`registry`] - The closed [`Formula`] enum and its display metadata
//!
//! ## Units
//!
//! Inputs and outputs are SI: metres, kilograms, seconds, newtons, pascals,
//! joules, watts. The one exception is the work angle, taken in degrees.

pub mod mechanics;
pub mod registry;

pub use mechanics::{
    acceleration,
    density,
    force,
    kinetic_energy,
    momentum,
    potential_energy,
    power,
    pressure,
    velocity,
    work,
    STANDARD_GRAVITY,
};

pub use registry::{
    Difficulty,
    Formula,
    FormulaSpec,
    FormulaVariable,
    ALL_FORMULAS,
    generate_formulas_markdown,
};
