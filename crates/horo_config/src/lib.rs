//! Chart configuration loaded from TOML.
//!
//! ```toml
//! house_system = "koch"
//!
//! [houses]
//! altitude_m = 35.0
//!
//! [houses.limits]
//! time_based_max_deg = 66.0
//!
//! [returns]
//! tolerance_seconds = 1.0
//!
//! [[aspects]]
//! kind = "square"
//! angle_deg = 90.0
//! orb_deg = 6.0
//! ```
//!
//! Every section is optional and missing fields take their defaults. A value
//! that is present but out of range is an error, never replaced by a default.

pub mod error;

use std::path::Path;

use horo_aspects::OrbTable;
use horo_houses::{HouseOptions, HouseSystem};
use horo_search::ReturnConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use error::ConfigError;

/// Settings for casting a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// House system used when the caller does not name one.
    pub house_system: HouseSystem,
    /// Observer altitude and latitude limits.
    pub houses: HouseOptions,
    /// Solver settings for returns.
    pub returns: ReturnConfig,
    /// Aspect definitions. An absent list means all 11 with default orbs.
    pub aspects: OrbTable,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus,
            houses: HouseOptions::default(),
            returns: ReturnConfig::default(),
            aspects: OrbTable::default(),
        }
    }
}

impl ChartConfig {
    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            house_system = %config.house_system,
            aspects = config.aspects.definitions().len(),
            "loaded chart config"
        );
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate every section, reporting the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.houses
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[houses] {e}")))?;
        self.aspects
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[aspects] {e}")))?;
        self.returns
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("[returns] {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horo_aspects::AspectKind;

    #[test]
    fn empty_document_is_default() {
        let c = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(c, ChartConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let c = ChartConfig::from_toml_str(
            r#"
            house_system = "regiomontanus"

            [houses.limits]
            polar_circle_margin_deg = 1.5

            [returns]
            max_iterations = 50
            "#,
        )
        .unwrap();
        assert_eq!(c.house_system, HouseSystem::Regiomontanus);
        assert_eq!(c.houses.limits.polar_circle_margin_deg, 1.5);
        assert_eq!(c.houses.limits.time_based_max_deg, 60.0);
        assert_eq!(c.houses.altitude_m, 0.0);
        assert_eq!(c.returns.max_iterations, 50);
        assert_eq!(c.returns.tolerance_seconds, 60.0);
        assert_eq!(c.aspects, OrbTable::default());
    }

    #[test]
    fn aspect_list_replaces_default_table() {
        let c = ChartConfig::from_toml_str(
            r#"
            [[aspects]]
            kind = "conjunction"
            angle_deg = 0.0
            orb_deg = 10.0

            [[aspects]]
            kind = "trine"
            angle_deg = 120.0
            orb_deg = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(c.aspects.definitions().len(), 2);
        assert_eq!(c.aspects.get(AspectKind::Trine).unwrap().orb_deg, 5.0);
        assert!(c.aspects.get(AspectKind::Square).is_none());
    }

    #[test]
    fn out_of_range_values_are_errors() {
        let err = ChartConfig::from_toml_str("[returns]\nmax_iterations = 0\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("[returns] max_iterations must be > 0".into())
        );

        let err = ChartConfig::from_toml_str("[houses.limits]\ntime_based_max_deg = 95.0\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.starts_with("[houses]")));

        let err = ChartConfig::from_toml_str(
            "[[aspects]]\nkind = \"square\"\nangle_deg = 90.0\norb_deg = -2.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.starts_with("[aspects]")));
    }

    #[test]
    fn unknown_house_system_is_parse_error() {
        let err = ChartConfig::from_toml_str("house_system = \"alcabitus\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_survives_serialization() {
        let text = ChartConfig::default().to_toml_string().unwrap();
        assert_eq!(
            ChartConfig::from_toml_str(&text).unwrap(),
            ChartConfig::default()
        );
    }
}
