//! # Settings
//!
//! Tunables for the calculator: formatter options, the default gravity used
//! for potential energy, and whether to memoize results. Every field has a
//! default, so `{}` is a valid settings document.
//!
//! ```rust
//! use rumus_core::settings::Settings;
//!
//! let settings = Settings::from_json(r#"{ "format": { "precision": 3 } }"#).unwrap();
//! assert_eq!(settings.format.precision, 3);
//! assert_eq!(settings.gravity, 9.8);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::{FormatOptions, MAX_PRECISION};
use crate::formulas::mechanics::STANDARD_GRAVITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Result formatting
    pub format: FormatOptions,

    /// Gravity (m/s²) used when a potential-energy request leaves it blank
    pub gravity: f64,

    pub cache: CacheSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            format: FormatOptions::default(),
            gravity: STANDARD_GRAVITY,
            cache: CacheSettings::default(),
        }
    }
}

/// Memoization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    /// Upper bound on cached results; `None` is unbounded
    pub max_entries: Option<usize>,
}

impl Settings {
    /// Parse and validate a JSON settings document.
    pub fn from_json(json: &str) -> CalcResult<Settings> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| CalcError::settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every value is usable by the formatter and engine.
    pub fn validate(&self) -> CalcResult<()> {
        let threshold = self.format.scientific_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold >= 1.0 {
            tracing::warn!(threshold, "Rejected scientific threshold");
            return Err(CalcError::settings(format!(
                "scientific_threshold must be between 0 and 1 (exclusive), got {threshold}"
            )));
        }
        if self.format.precision > MAX_PRECISION {
            tracing::warn!(precision = self.format.precision, "Rejected precision");
            return Err(CalcError::settings(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.format.precision
            )));
        }
        if !self.gravity.is_finite() {
            tracing::warn!(gravity = self.gravity, "Rejected gravity");
            return Err(CalcError::settings("gravity must be a finite number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.format.precision, 2);
        assert_eq!(settings.format.scientific_threshold, 1e-4);
        assert_eq!(settings.gravity, 9.8);
        assert!(!settings.cache.enabled);
        assert_eq!(settings.cache.max_entries, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_document() {
        let settings = Settings::from_json(
            r#"{ "gravity": 1.62, "cache": { "enabled": true, "max_entries": 64 } }"#,
        )
        .unwrap();
        assert_eq!(settings.gravity, 1.62);
        assert!(settings.cache.enabled);
        assert_eq!(settings.cache.max_entries, Some(64));
        assert_eq!(settings.format, FormatOptions::default());
    }

    #[test]
    fn test_rejects_bad_threshold() {
        for json in [
            r#"{ "format": { "scientific_threshold": 0 } }"#,
            r#"{ "format": { "scientific_threshold": 1.5 } }"#,
            r#"{ "format": { "scientific_threshold": -0.1 } }"#,
        ] {
            let err = Settings::from_json(json).unwrap_err();
            assert_eq!(err.error_code(), "SETTINGS_ERROR");
        }
    }

    #[test]
    fn test_rejects_bad_precision() {
        let err = Settings::from_json(r#"{ "format": { "precision": 40 } }"#).unwrap_err();
        assert!(err.to_string().contains("precision"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ gravity: 9.8").unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let settings = Settings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("scientific_threshold"));
        let roundtrip: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, settings);
    }
}
