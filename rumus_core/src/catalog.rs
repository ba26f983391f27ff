//! # Formula Catalog
//!
//! Read-only lookup over the formula registry, by id and by category.
//!
//! The process-wide [`CATALOG`] is built on first access and never mutated
//! afterwards, so any number of threads may read it concurrently.
//!
//! ## Example
//!
//! ```rust
//! use rumus_core::catalog::CATALOG;
//!
//! let spec = CATALOG.get_by_id("pressure").unwrap();
//! assert_eq!(spec.formula, "P = F / A");
//!
//! // Unknown categories are simply empty
//! assert!(CATALOG.list_by_category("NoSuchCategory").is_empty());
//! ```

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};
use crate::formulas::registry::{Formula, FormulaSpec, ALL_FORMULAS};

/// The process-wide formula catalog.
pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::new);

/// Immutable formula collection plus its category grouping.
#[derive(Debug, Clone)]
pub struct Catalog {
    formulas: Vec<Formula>,
    /// Category → formulas, both in first-declaration order
    categories: Vec<(&'static str, Vec<Formula>)>,
}

impl Catalog {
    /// Build the catalog from the static registry.
    ///
    /// Every formula lands in exactly one category because each spec carries
    /// exactly one category label.
    pub fn new() -> Self {
        let formulas = ALL_FORMULAS.to_vec();
        let mut categories: Vec<(&'static str, Vec<Formula>)> = Vec::new();

        for formula in &formulas {
            let category = formula.spec().category;
            match categories.iter_mut().find(|(name, _)| *name == category) {
                Some((_, members)) => members.push(*formula),
                None => categories.push((category, vec![*formula])),
            }
        }

        tracing::debug!(
            formulas = formulas.len(),
            categories = categories.len(),
            "Formula catalog initialized"
        );

        Catalog {
            formulas,
            categories,
        }
    }

    /// Look up a formula's metadata by its string id.
    ///
    /// Any string is accepted; absence is reported as `FormulaNotFound`.
    pub fn get_by_id(&self, id: &str) -> CalcResult<&'static FormulaSpec> {
        self.formula(id).map(|f| f.spec())
    }

    /// Resolve a string id to its [`Formula`] variant.
    pub fn formula(&self, id: &str) -> CalcResult<Formula> {
        Formula::from_id(id).ok_or_else(|| CalcError::formula_not_found(id))
    }

    /// All formulas in declaration order.
    pub fn list_all(&self) -> Vec<&'static FormulaSpec> {
        self.formulas.iter().map(|f| f.spec()).collect()
    }

    /// Formulas in a category, in declaration order.
    ///
    /// Categories are open-ended labels: an unknown one yields an empty list.
    pub fn list_by_category(&self, category: &str) -> Vec<&'static FormulaSpec> {
        self.categories
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, members)| members.iter().map(|f| f.spec()).collect())
            .unwrap_or_default()
    }

    /// Category names in first-declaration order
    pub fn categories(&self) -> Vec<&'static str> {
        self.categories.iter().map(|(name, _)| *name).collect()
    }

    /// The full category → formulas grouping
    pub fn category_index(&self) -> &[(&'static str, Vec<Formula>)] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
