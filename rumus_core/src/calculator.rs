//! # Calculator
//!
//! Connects the pieces along the one-way data flow:
//!
//! ```text
//! raw text ──► validation ──► FormulaInput ──► evaluate ──► CalculationResult ──► format
//! ```
//!
//! [`FormulaInput`] is the strongly typed entry point: one variant per
//! formula with its named quantities. [`Calculator::calculate`] is the
//! text-in entry point used by interactive shells.
//!
//! ## Example
//!
//! ```rust
//! use rumus_core::calculator::{CalculationRequest, Calculator};
//!
//! let calc = Calculator::default();
//! let request = CalculationRequest::new("linear_motion")
//!     .with_input("displacement", "100")
//!     .with_input("time", "5");
//!
//! let result = calc.calculate(&request).unwrap();
//! assert_eq!(result.value, 20.0);
//! assert_eq!(calc.display(&result), "20 m/s");
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheKey, CalculationCache, MemoCache};
use crate::catalog::CATALOG;
use crate::errors::{CalcError, CalcResult};
use crate::format::format_value;
use crate::formulas::mechanics;
use crate::formulas::registry::Formula;
use crate::settings::Settings;
use crate::validation::validate_inputs;

// ============================================================================
// Input Fields
// ============================================================================

/// A named input a formula's calculator form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputField {
    /// Key used in [`CalculationRequest::inputs`]
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    /// Optional fields fall back to a default when left blank
    pub optional: bool,
}

impl InputField {
    const fn required(name: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            label,
            unit,
            optional: false,
        }
    }

    const fn optional(name: &'static str, label: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            label,
            unit,
            optional: true,
        }
    }
}

/// Default angle between force and displacement (degrees)
pub const DEFAULT_ANGLE_DEG: f64 = 0.0;

const VELOCITY_FIELDS: &[InputField] = &[
    InputField::required("displacement", "Displacement (s)", "m"),
    InputField::required("time", "Time (t)", "s"),
];
const FORCE_FIELDS: &[InputField] = &[
    InputField::required("mass", "Mass (m)", "kg"),
    InputField::required("acceleration", "Acceleration (a)", "m/s²"),
];
const PRESSURE_FIELDS: &[InputField] = &[
    InputField::required("force", "Force (F)", "N"),
    InputField::required("area", "Area (A)", "m²"),
];
const WORK_FIELDS: &[InputField] = &[
    InputField::required("force", "Force (F)", "N"),
    InputField::required("displacement", "Displacement (s)", "m"),
    InputField::optional("angle", "Angle (θ)", "°"),
];
const KINETIC_ENERGY_FIELDS: &[InputField] = &[
    InputField::required("mass", "Mass (m)", "kg"),
    InputField::required("velocity", "Velocity (v)", "m/s"),
];
const POTENTIAL_ENERGY_FIELDS: &[InputField] = &[
    InputField::required("mass", "Mass (m)", "kg"),
    InputField::required("height", "Height (h)", "m"),
    InputField::optional("gravity", "Gravity (g)", "m/s²"),
];
const POWER_FIELDS: &[InputField] = &[
    InputField::required("work", "Work (W)", "J"),
    InputField::required("time", "Time (t)", "s"),
];
const DENSITY_FIELDS: &[InputField] = &[
    InputField::required("mass", "Mass (m)", "kg"),
    InputField::required("volume", "Volume (V)", "m³"),
];
const ACCELERATION_FIELDS: &[InputField] = &[
    InputField::required("initial_velocity", "Initial Velocity (v₁)", "m/s"),
    InputField::required("final_velocity", "Final Velocity (v₂)", "m/s"),
    InputField::required("time", "Time (t)", "s"),
];
const MOMENTUM_FIELDS: &[InputField] = &[
    InputField::required("mass", "Mass (m)", "kg"),
    InputField::required("velocity", "Velocity (v)", "m/s"),
];

impl Formula {
    /// Input fields in the order the calculator form presents them.
    pub fn input_fields(&self) -> &'static [InputField] {
        match self {
            Formula::Velocity => VELOCITY_FIELDS,
            Formula::Force => FORCE_FIELDS,
            Formula::Pressure => PRESSURE_FIELDS,
            Formula::Work => WORK_FIELDS,
            Formula::KineticEnergy => KINETIC_ENERGY_FIELDS,
            Formula::PotentialEnergy => POTENTIAL_ENERGY_FIELDS,
            Formula::Power => POWER_FIELDS,
            Formula::Density => DENSITY_FIELDS,
            Formula::Acceleration => ACCELERATION_FIELDS,
            Formula::Momentum => MOMENTUM_FIELDS,
        }
    }
}

// ============================================================================
// Typed Inputs
// ============================================================================

/// Validated quantities for one formula evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum FormulaInput {
    #[serde(rename = "linear_motion")]
    Velocity { displacement: f64, time: f64 },
    Force { mass: f64, acceleration: f64 },
    Pressure { force: f64, area: f64 },
    Work { force: f64, displacement: f64, angle_deg: f64 },
    KineticEnergy { mass: f64, velocity: f64 },
    PotentialEnergy { mass: f64, height: f64, gravity: f64 },
    Power { work: f64, time: f64 },
    Density { mass: f64, volume: f64 },
    Acceleration { initial_velocity: f64, final_velocity: f64, time: f64 },
    Momentum { mass: f64, velocity: f64 },
}

impl FormulaInput {
    /// The formula this input evaluates
    pub fn formula(&self) -> Formula {
        match self {
            FormulaInput::Velocity { .. } => Formula::Velocity,
            FormulaInput::Force { .. } => Formula::Force,
            FormulaInput::Pressure { .. } => Formula::Pressure,
            FormulaInput::Work { .. } => Formula::Work,
            FormulaInput::KineticEnergy { .. } => Formula::KineticEnergy,
            FormulaInput::PotentialEnergy { .. } => Formula::PotentialEnergy,
            FormulaInput::Power { .. } => Formula::Power,
            FormulaInput::Density { .. } => Formula::Density,
            FormulaInput::Acceleration { .. } => Formula::Acceleration,
            FormulaInput::Momentum { .. } => Formula::Momentum,
        }
    }

    /// Argument values in [`Formula::input_fields`] order
    pub fn args(&self) -> Vec<f64> {
        match *self {
            FormulaInput::Velocity { displacement, time } => vec![displacement, time],
            FormulaInput::Force { mass, acceleration } => vec![mass, acceleration],
            FormulaInput::Pressure { force, area } => vec![force, area],
            FormulaInput::Work {
                force,
                displacement,
                angle_deg,
            } => vec![force, displacement, angle_deg],
            FormulaInput::KineticEnergy { mass, velocity } => vec![mass, velocity],
            FormulaInput::PotentialEnergy { mass, height, gravity } => vec![mass, height, gravity],
            FormulaInput::Power { work, time } => vec![work, time],
            FormulaInput::Density { mass, volume } => vec![mass, volume],
            FormulaInput::Acceleration {
                initial_velocity,
                final_velocity,
                time,
            } => vec![initial_velocity, final_velocity, time],
            FormulaInput::Momentum { mass, velocity } => vec![mass, velocity],
        }
    }

    /// Build a typed input from named values.
    ///
    /// Optional quantities missing from `values` take their defaults
    /// (`angle` = 0°, `gravity` = `gravity`).
    pub fn from_values(
        formula: Formula,
        values: &BTreeMap<String, f64>,
        gravity: f64,
    ) -> CalcResult<Self> {
        let get = |name: &str| {
            values
                .get(name)
                .copied()
                .ok_or_else(|| CalcError::missing_input(formula.id(), name))
        };

        let input = match formula {
            Formula::Velocity => FormulaInput::Velocity {
                displacement: get("displacement")?,
                time: get("time")?,
            },
            Formula::Force => FormulaInput::Force {
                mass: get("mass")?,
                acceleration: get("acceleration")?,
            },
            Formula::Pressure => FormulaInput::Pressure {
                force: get("force")?,
                area: get("area")?,
            },
            Formula::Work => FormulaInput::Work {
                force: get("force")?,
                displacement: get("displacement")?,
                angle_deg: values.get("angle").copied().unwrap_or(DEFAULT_ANGLE_DEG),
            },
            Formula::KineticEnergy => FormulaInput::KineticEnergy {
                mass: get("mass")?,
                velocity: get("velocity")?,
            },
            Formula::PotentialEnergy => FormulaInput::PotentialEnergy {
                mass: get("mass")?,
                height: get("height")?,
                gravity: values.get("gravity").copied().unwrap_or(gravity),
            },
            Formula::Power => FormulaInput::Power {
                work: get("work")?,
                time: get("time")?,
            },
            Formula::Density => FormulaInput::Density {
                mass: get("mass")?,
                volume: get("volume")?,
            },
            Formula::Acceleration => FormulaInput::Acceleration {
                initial_velocity: get("initial_velocity")?,
                final_velocity: get("final_velocity")?,
                time: get("time")?,
            },
            Formula::Momentum => FormulaInput::Momentum {
                mass: get("mass")?,
                velocity: get("velocity")?,
            },
        };
        Ok(input)
    }
}

/// Evaluate one formula. Pure: no caching, no I/O.
pub fn evaluate(input: &FormulaInput) -> CalcResult<f64> {
    let result = match *input {
        FormulaInput::Velocity { displacement, time } => mechanics::velocity(displacement, time),
        FormulaInput::Force { mass, acceleration } => mechanics::force(mass, acceleration),
        FormulaInput::Pressure { force, area } => mechanics::pressure(force, area),
        FormulaInput::Work {
            force,
            displacement,
            angle_deg,
        } => mechanics::work(force, displacement, angle_deg),
        FormulaInput::KineticEnergy { mass, velocity } => mechanics::kinetic_energy(mass, velocity),
        FormulaInput::PotentialEnergy { mass, height, gravity } => {
            mechanics::potential_energy(mass, height, gravity)
        }
        FormulaInput::Power { work, time } => mechanics::power(work, time),
        FormulaInput::Density { mass, volume } => mechanics::density(mass, volume),
        FormulaInput::Acceleration {
            initial_velocity,
            final_velocity,
            time,
        } => mechanics::acceleration(initial_velocity, final_velocity, time),
        FormulaInput::Momentum { mass, velocity } => mechanics::momentum(mass, velocity),
    };

    match &result {
        Ok(value) => tracing::debug!(formula = %input.formula(), value, "Formula evaluated"),
        Err(error) => tracing::debug!(formula = %input.formula(), %error, "Formula rejected input"),
    }
    result
}

// ============================================================================
// Requests & Results
// ============================================================================

/// Raw text inputs for one calculation attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Catalog id of the selected formula
    pub formula_id: String,
    /// Field name → raw text as typed by the user
    pub inputs: BTreeMap<String, String>,
}

impl CalculationRequest {
    pub fn new(formula_id: impl Into<String>) -> Self {
        Self {
            formula_id: formula_id.into(),
            inputs: BTreeMap::new(),
        }
    }

    pub fn with_input(mut self, field: impl Into<String>, text: impl Into<String>) -> Self {
        self.inputs.insert(field.into(), text.into());
        self
    }
}

/// A computed value with its SI unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub formula: Formula,
    pub value: f64,
    pub unit: String,
}

impl CalculationResult {
    /// Render with the given formatter options
    pub fn display(&self, opts: &crate::format::FormatOptions) -> String {
        format_value(self.value, &self.unit, opts)
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Text-in, result-out calculator with optional memoization.
#[derive(Clone)]
pub struct Calculator {
    settings: Settings,
    cache: Option<Arc<dyn CalculationCache>>,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("settings", &self.settings)
            .field("cached_entries", &self.cache.as_ref().map(|c| c.len()))
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Calculator {
    /// Create a calculator. A [`MemoCache`] is attached when `settings.cache.enabled`.
    pub fn new(settings: Settings) -> Self {
        let cache: Option<Arc<dyn CalculationCache>> = if settings.cache.enabled {
            Some(match settings.cache.max_entries {
                Some(max) => Arc::new(MemoCache::with_max_entries(max)),
                None => Arc::new(MemoCache::new()),
            })
        } else {
            None
        };
        Self { settings, cache }
    }

    /// Replace the cache with a caller-owned one
    pub fn with_cache(mut self, cache: Arc<dyn CalculationCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> Option<&Arc<dyn CalculationCache>> {
        self.cache.as_ref()
    }

    /// Evaluate a typed input, through the cache when one is attached.
    pub fn compute(&self, input: &FormulaInput) -> CalcResult<f64> {
        match &self.cache {
            Some(cache) => {
                let key = CacheKey::new(input.formula(), &input.args());
                cache.get_or_compute(key, &mut || evaluate(input))
            }
            None => evaluate(input),
        }
    }

    /// Validate raw text inputs, evaluate, and attach the result unit.
    ///
    /// # Errors
    ///
    /// - `FormulaNotFound` for an unknown `formula_id`
    /// - `MissingInput` when a required field is absent from the request
    /// - `InvalidInputs` listing every field that failed validation
    /// - `DivisionByZero` from the formula's guard
    pub fn calculate(&self, request: &CalculationRequest) -> CalcResult<CalculationResult> {
        let formula = CATALOG.formula(&request.formula_id)?;

        let mut present: Vec<(&str, &str)> = Vec::new();
        for field in formula.input_fields() {
            match request.inputs.get(field.name) {
                Some(text) if field.optional && text.is_empty() => {}
                Some(text) => present.push((field.name, text.as_str())),
                None if field.optional => {}
                None => return Err(CalcError::missing_input(formula.id(), field.name)),
            }
        }

        let values = validate_inputs(present)?;
        let input = FormulaInput::from_values(formula, &values, self.settings.gravity)?;
        let value = self.compute(&input)?;

        Ok(CalculationResult {
            formula,
            value,
            unit: formula.spec().result_unit.to_string(),
        })
    }

    /// Format a result with this calculator's settings
    pub fn display(&self, result: &CalculationResult) -> String {
        result.display(&self.settings.format)
    }
}
