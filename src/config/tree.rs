use super::traits::ConfigSection;
use crate::engines::spatial::GrowthSettings;
use crate::error::ArboretumError;
use serde::{Deserialize, Serialize};

/// Organism-level settings: development depth and the spatial
/// interpretation of the grown body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Number of rewriting passes a body goes through before growth.
    /// Balance against genome size or bodies get very large.
    pub maturity: u32,
    pub collision_precision: u32,
    pub rotation_angle: f64,
    pub seed_skips: bool,
    pub reject_downward: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            maturity: 8,
            collision_precision: 1000,
            rotation_angle: std::f64::consts::FRAC_PI_6,
            seed_skips: false,
            reject_downward: false,
        }
    }
}

impl TreeConfig {
    pub fn growth_settings(&self) -> GrowthSettings {
        GrowthSettings {
            collision_precision: self.collision_precision,
            rotation_angle: self.rotation_angle,
            seed_skips: self.seed_skips,
            reject_downward: self.reject_downward,
        }
    }
}

impl ConfigSection for TreeConfig {
    fn section_name() -> &'static str {
        "tree"
    }

    fn validate(&self) -> Result<(), ArboretumError> {
        if self.maturity == 0 {
            return Err(ArboretumError::Configuration(
                "maturity must be at least 1".to_string(),
            ));
        }
        if self.collision_precision == 0 {
            return Err(ArboretumError::Configuration(
                "collision precision must be a positive integer".to_string(),
            ));
        }
        if !self.rotation_angle.is_finite() {
            return Err(ArboretumError::Configuration(
                "rotation angle must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
