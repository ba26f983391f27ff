//! # Formula Registry
//!
//! Central registry of every formula the app knows about. Each formula is a
//! variant of the closed [`Formula`] enum; its display metadata lives in a
//! static table keyed by the same enum.
//!
//! ## Usage
//!
//! ```rust
//! use rumus_core::formulas::registry::Formula;
//!
//! let spec = Formula::Force.spec();
//! assert_eq!(spec.formula, "F = m × a");
//! assert_eq!(Formula::from_id("force"), Some(Formula::Force));
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Difficulty
// ============================================================================

/// Rough difficulty label shown next to a formula in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// A quantity appearing in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormulaVariable {
    /// Symbol (e.g., "v", "ρ")
    pub symbol: &'static str,
    /// Human-readable name (e.g., "Velocity")
    pub name: &'static str,
    /// Unit with its spelled-out name (e.g., "m/s (meter per second)")
    pub unit: &'static str,
}

impl FormulaVariable {
    pub const fn new(symbol: &'static str, name: &'static str, unit: &'static str) -> Self {
        Self { symbol, name, unit }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Display metadata for one formula.
///
/// Constructed once as part of the static table and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaSpec {
    /// Unique string key (e.g., "linear_motion")
    pub id: &'static str,
    /// Listing title (e.g., "Linear Motion")
    pub title: &'static str,
    /// Open-ended grouping label (e.g., "Kinematics")
    pub category: &'static str,
    /// Symbolic form (e.g., "v = s / t")
    pub formula: &'static str,
    /// Worded form (e.g., "Velocity = Displacement ÷ Time")
    pub formula_display: &'static str,
    /// LaTeX form for typeset rendering
    pub formula_latex: &'static str,
    pub description: &'static str,
    /// Ordered variables, result quantity first
    pub variables: &'static [FormulaVariable],
    /// One or more worked examples, lines separated by `\n`
    pub example: &'static str,
    /// SI unit symbol of the computed quantity
    pub result_unit: &'static str,
    pub icon: Option<&'static str>,
    pub difficulty: Option<Difficulty>,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// All formulas in the catalog, in declaration order.
///
/// The discriminant doubles as the index into the metadata table, so the
/// variant order must match [`ALL_FORMULAS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// v = s / t
    #[serde(rename = "linear_motion")]
    Velocity,
    /// F = m × a
    Force,
    /// P = F / A
    Pressure,
    /// W = F × s × cosθ
    Work,
    /// Ek = ½ × m × v²
    KineticEnergy,
    /// Ep = m × g × h
    PotentialEnergy,
    /// P = W / t
    Power,
    /// ρ = m / V
    Density,
    /// a = (v₂ - v₁) / t
    Acceleration,
    /// p = m × v
    Momentum,
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::Velocity,
    Formula::Force,
    Formula::Pressure,
    Formula::Work,
    Formula::KineticEnergy,
    Formula::PotentialEnergy,
    Formula::Power,
    Formula::Density,
    Formula::Acceleration,
    Formula::Momentum,
];

impl Formula {
    /// Get the static metadata for this formula
    pub fn spec(&self) -> &'static FormulaSpec {
        &FORMULA_SPECS[*self as usize]
    }

    /// String key used by the catalog and calculation requests
    pub fn id(&self) -> &'static str {
        self.spec().id
    }

    /// Look up a formula by its string key. Unknown keys return `None`.
    pub fn from_id(id: &str) -> Option<Formula> {
        ALL_FORMULAS.iter().copied().find(|f| f.id() == id)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Metadata Table
// ============================================================================

static FORMULA_SPECS: [FormulaSpec; 10] = [
    FormulaSpec {
        id: "linear_motion",
        title: "Linear Motion",
        category: "Kinematics",
        formula: "v = s / t",
        formula_display: "Velocity = Displacement ÷ Time",
        formula_latex: r"v = \frac{s}{t}",
        description: "Velocity is defined as the rate of change of displacement with respect \
                      to time. It measures how fast an object moves in a specific direction.",
        variables: &[
            FormulaVariable::new("v", "Velocity", "m/s (meter per second)"),
            FormulaVariable::new("s", "Displacement", "m (meter)"),
            FormulaVariable::new("t", "Time", "s (second)"),
        ],
        example: "A car travels 100 meters in 5 seconds. What is its velocity?\n\n\
                  Solution:\nv = s / t\nv = 100 m / 5 s\nv = 20 m/s",
        result_unit: "m/s",
        icon: Some("🚗"),
        difficulty: Some(Difficulty::Easy),
    },
    FormulaSpec {
        id: "force",
        title: "Force",
        category: "Dynamics",
        formula: "F = m × a",
        formula_display: "Force = Mass × Acceleration",
        formula_latex: r"F = m \times a",
        description: "Newton's Second Law of Motion states that the force acting on an object \
                      is equal to the mass of that object multiplied by its acceleration.",
        variables: &[
            FormulaVariable::new("F", "Force", "N (Newton)"),
            FormulaVariable::new("m", "Mass", "kg (kilogram)"),
            FormulaVariable::new("a", "Acceleration", "m/s² (meter per second squared)"),
        ],
        example: "A 5 kg object accelerates at 3 m/s². Calculate the force.\n\n\
                  Solution:\nF = m × a\nF = 5 kg × 3 m/s²\nF = 15 N",
        result_unit: "N",
        icon: Some("⚡"),
        difficulty: Some(Difficulty::Medium),
    },
    FormulaSpec {
        id: "pressure",
        title: "Pressure",
        category: "Fluid Mechanics",
        formula: "P = F / A",
        formula_display: "Pressure = Force ÷ Area",
        formula_latex: r"P = \frac{F}{A}",
        description: "Pressure is defined as force per unit area. It measures how concentrated \
                      a force is over a surface area.",
        variables: &[
            FormulaVariable::new("P", "Pressure", "Pa (Pascal)"),
            FormulaVariable::new("F", "Force", "N (Newton)"),
            FormulaVariable::new("A", "Area", "m² (square meter)"),
        ],
        example: "A force of 500 N is applied over an area of 2 m². Find the pressure.\n\n\
                  Solution:\nP = F / A\nP = 500 N / 2 m²\nP = 250 Pa",
        result_unit: "Pa",
        icon: Some("💧"),
        difficulty: Some(Difficulty::Easy),
    },
    FormulaSpec {
        id: "work",
        title: "Work",
        category: "Energy",
        formula: "W = F × s × cosθ",
        formula_display: "Work = Force × Displacement × cos(θ)",
        formula_latex: r"W = F \times s \times \cos\theta",
        description: "Work is done when a force causes an object to move. It is the product of \
                      force and displacement in the direction of the force.",
        variables: &[
            FormulaVariable::new("W", "Work", "J (Joule)"),
            FormulaVariable::new("F", "Force", "N (Newton)"),
            FormulaVariable::new("s", "Displacement", "m (meter)"),
            FormulaVariable::new("θ", "Angle", "degree"),
        ],
        example: "A person pushes a box with 20 N force for 5 meters in the same direction. \
                  Calculate work done.\n\n\
                  Solution:\nW = F × s × cos(0°)\nW = 20 N × 5 m × 1\nW = 100 J",
        result_unit: "J",
        icon: Some("💪"),
        difficulty: Some(Difficulty::Medium),
    },
    FormulaSpec {
        id: "kinetic_energy",
        title: "Kinetic Energy",
        category: "Energy",
        formula: "Ek = ½ × m × v²",
        formula_display: "Kinetic Energy = ½ × Mass × Velocity²",
        formula_latex: r"E_k = \frac{1}{2} m v^2",
        description: "Kinetic energy is the energy possessed by an object due to its motion. \
                      It depends on both mass and velocity.",
        variables: &[
            FormulaVariable::new("Ek", "Kinetic Energy", "J (Joule)"),
            FormulaVariable::new("m", "Mass", "kg (kilogram)"),
            FormulaVariable::new("v", "Velocity", "m/s (meter per second)"),
        ],
        example: "A 2 kg ball moves at 4 m/s. Calculate its kinetic energy.\n\n\
                  Solution:\nEk = ½ × m × v²\nEk = ½ × 2 kg × (4 m/s)²\nEk = ½ × 2 × 16\nEk = 16 J",
        result_unit: "J",
        icon: Some("⚡"),
        difficulty: Some(Difficulty::Medium),
    },
    FormulaSpec {
        id: "potential_energy",
        title: "Potential Energy",
        category: "Energy",
        formula: "Ep = m × g × h",
        formula_display: "Potential Energy = Mass × Gravity × Height",
        formula_latex: r"E_p = m g h",
        description: "Potential energy is the energy stored in an object due to its position in a \
                      gravitational field. It depends on height and mass.",
        variables: &[
            FormulaVariable::new("Ep", "Potential Energy", "J (Joule)"),
            FormulaVariable::new("m", "Mass", "kg (kilogram)"),
            FormulaVariable::new("g", "Gravity", "9.8 m/s²"),
            FormulaVariable::new("h", "Height", "m (meter)"),
        ],
        example: "A 3 kg book is placed on a shelf 2 meters high. Find its potential energy.\n\n\
                  Solution:\nEp = m × g × h\nEp = 3 kg × 9.8 m/s² × 2 m\nEp = 58.8 J",
        result_unit: "J",
        icon: Some("📚"),
        difficulty: Some(Difficulty::Easy),
    },
    FormulaSpec {
        id: "power",
        title: "Power",
        category: "Energy",
        formula: "P = W / t",
        formula_display: "Power = Work ÷ Time",
        formula_latex: r"P = \frac{W}{t}",
        description: "Power is the rate at which work is done or energy is transferred. \
                      It measures how quickly work is completed.",
        variables: &[
            FormulaVariable::new("P", "Power", "W (Watt)"),
            FormulaVariable::new("W", "Work", "J (Joule)"),
            FormulaVariable::new("t", "Time", "s (second)"),
        ],
        example: "A machine does 200 J of work in 4 seconds. Calculate its power.\n\n\
                  Solution:\nP = W / t\nP = 200 J / 4 s\nP = 50 W",
        result_unit: "W",
        icon: Some("⚡"),
        difficulty: Some(Difficulty::Easy),
    },
    FormulaSpec {
        id: "density",
        title: "Density",
        category: "Properties of Matter",
        formula: "ρ = m / V",
        formula_display: "Density = Mass ÷ Volume",
        formula_latex: r"\rho = \frac{m}{V}",
        description: "Density is a measure of mass per unit volume. It indicates how much matter \
                      is packed into a given space.",
        variables: &[
            FormulaVariable::new("ρ", "Density", "kg/m³"),
            FormulaVariable::new("m", "Mass", "kg (kilogram)"),
            FormulaVariable::new("V", "Volume", "m³ (cubic meter)"),
        ],
        example: "A metal block has mass 10 kg and volume 0.002 m³. Find its density.\n\n\
                  Solution:\nρ = m / V\nρ = 10 kg / 0.002 m³\nρ = 5000 kg/m³",
        result_unit: "kg/m³",
        icon: Some("⚖️"),
        difficulty: Some(Difficulty::Easy),
    },
    FormulaSpec {
        id: "acceleration",
        title: "Acceleration",
        category: "Kinematics",
        formula: "a = (v₂ - v₁) / t",
        formula_display: "Acceleration = (Final Velocity - Initial Velocity) ÷ Time",
        formula_latex: r"a = \frac{v_2 - v_1}{t}",
        description: "Acceleration is the rate of change of velocity with respect to time. \
                      A negative value means the object is slowing down.",
        variables: &[
            FormulaVariable::new("a", "Acceleration", "m/s² (meter per second squared)"),
            FormulaVariable::new("v₁", "Initial Velocity", "m/s (meter per second)"),
            FormulaVariable::new("v₂", "Final Velocity", "m/s (meter per second)"),
            FormulaVariable::new("t", "Time", "s (second)"),
        ],
        example: "A bicycle speeds up from 0 m/s to 20 m/s in 4 seconds. Find its acceleration.\n\n\
                  Solution:\na = (v₂ - v₁) / t\na = (20 m/s - 0 m/s) / 4 s\na = 5 m/s²",
        result_unit: "m/s²",
        icon: Some("🚀"),
        difficulty: Some(Difficulty::Medium),
    },
    FormulaSpec {
        id: "momentum",
        title: "Momentum",
        category: "Dynamics",
        formula: "p = m × v",
        formula_display: "Momentum = Mass × Velocity",
        formula_latex: r"p = m \times v",
        description: "Momentum is the quantity of motion of an object. It is the product of the \
                      object's mass and its velocity.",
        variables: &[
            FormulaVariable::new("p", "Momentum", "kg·m/s (kilogram meter per second)"),
            FormulaVariable::new("m", "Mass", "kg (kilogram)"),
            FormulaVariable::new("v", "Velocity", "m/s (meter per second)"),
        ],
        example: "A 1500 kg car moves at 20 m/s. Find its momentum.\n\n\
                  Solution:\np = m × v\np = 1500 kg × 20 m/s\np = 30000 kg·m/s",
        result_unit: "kg·m/s",
        icon: Some("🎱"),
        difficulty: Some(Difficulty::Easy),
    },
];

// ============================================================================
// Markdown Generation for FORMULAS.md
// ============================================================================

/// Generate a complete FORMULAS.md reference from the registry.
///
/// Formulas are grouped by category in first-declaration order.
///
/// # Example
///
/// ```rust
/// use rumus_core::formulas::registry::generate_formulas_markdown;
///
/// let markdown = generate_formulas_markdown();
/// assert!(markdown.contains("# Rumus Formula Reference"));
/// assert!(markdown.contains("## Kinematics"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Rumus Formula Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Every formula the calculator supports, grouped by category.
All quantities are SI units unless noted.

---

"#,
    );

    let index = crate::catalog::CATALOG.category_index();

    for (category, formulas) in index {
        output.push_str(&format!("## {}\n\n", category));

        for formula in formulas {
            let spec = formula.spec();

            match spec.icon {
                Some(icon) => output.push_str(&format!("### {} {}\n\n", icon, spec.title)),
                None => output.push_str(&format!("### {}\n\n", spec.title)),
            }

            output.push_str(&format!("{}\n\n", spec.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", spec.formula));
            output.push_str(&format!("*{}*\n\n", spec.formula_display));

            if !spec.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Name | Unit |\n");
                output.push_str("|--------|------|------|\n");
                for var in spec.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.name, var.unit));
                }
                output.push('\n');
            }

            if let Some(difficulty) = spec.difficulty {
                output.push_str(&format!("**Difficulty:** {}\n\n", difficulty.display_name()));
            }

            output.push_str("**Example:**\n\n```text\n");
            output.push_str(spec.example);
            output.push_str("\n```\n\n---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        crate::catalog::CATALOG.categories().len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
