//! Runtime configuration for a planet session.
//!
//! Compile-time defaults come from `config::constants`; this struct is what
//! a host fills in (usually from JSON) to override them.

use config::constants::{DEFAULT_EXTRUDE_SCALES, DEFAULT_RADIUS, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

use crate::error::{check_scale, GeodesicResult};
use crate::export::ExportOptions;
use crate::ops::ExtrudePolicy;

/// Settings for building, transforming and exporting a planet.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeodesicConfig {
    /// Radius of the base icosahedron and target of normalize.
    pub radius: f64,
    /// Seed of the random source for colors and extrusion factors.
    pub seed: u64,
    /// Factors extrude draws from, one per tile.
    pub extrude_scales: Vec<f64>,
    /// Optional buffers to export.
    pub export: ExportOptions,
}

impl Default for GeodesicConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            seed: DEFAULT_SEED,
            extrude_scales: DEFAULT_EXTRUDE_SCALES.to_vec(),
            export: ExportOptions::default(),
        }
    }
}

impl GeodesicConfig {
    /// Default settings with another seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Checks that the radius and every extrusion factor are finite and
    /// strictly positive.
    ///
    /// # Errors
    ///
    /// `InvalidScale` naming the first bad value.
    pub fn validate(&self) -> GeodesicResult<()> {
        check_scale(self.radius)?;
        for scale in &self.extrude_scales {
            check_scale(*scale)?;
        }
        Ok(())
    }

    /// The extrusion policy these settings describe.
    pub fn extrude_policy(&self) -> ExtrudePolicy {
        ExtrudePolicy::Choose(self.extrude_scales.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeodesicError;

    #[test]
    fn test_config_default() {
        let config = GeodesicConfig::default();
        assert_eq!(config.radius, DEFAULT_RADIUS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.extrude_scales, vec![0.9, 1.0, 1.1]);
        assert!(config.export.lines);
        assert!(!config.export.sides);
        assert!(config.validate().is_ok());
        assert_eq!(config.extrude_policy(), ExtrudePolicy::default());
    }

    #[test]
    fn test_config_with_seed() {
        let config = GeodesicConfig::with_seed(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.radius, DEFAULT_RADIUS);
    }

    #[test]
    fn test_config_validate_rejects_bad_values() {
        let config = GeodesicConfig {
            radius: -2.0,
            ..GeodesicConfig::default()
        };
        assert_eq!(config.validate(), Err(GeodesicError::InvalidScale { value: -2.0 }));

        let config = GeodesicConfig {
            extrude_scales: vec![1.0, 0.0],
            ..GeodesicConfig::default()
        };
        assert_eq!(config.validate(), Err(GeodesicError::InvalidScale { value: 0.0 }));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: GeodesicConfig =
            serde_json::from_str(r#"{"radius": 2.5, "export": {"sides": true}}"#).unwrap();
        assert_eq!(config.radius, 2.5);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(config.export.lines);
        assert!(config.export.sides);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GeodesicConfig::with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: GeodesicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
