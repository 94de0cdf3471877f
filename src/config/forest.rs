use super::traits::ConfigSection;
use crate::error::ArboretumError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub population_size: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
        }
    }
}

impl ConfigSection for ForestConfig {
    fn section_name() -> &'static str {
        "forest"
    }

    fn validate(&self) -> Result<(), ArboretumError> {
        if self.population_size == 0 {
            return Err(ArboretumError::Configuration(
                "population size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
