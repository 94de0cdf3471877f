use super::traits::ConfigSection;
use crate::error::ArboretumError;
use serde::{Deserialize, Serialize};

/// Run-level settings: how long to evolve, where to write results, and the
/// RNG seed (0 picks a non-deterministic seed).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
    pub outdir: String,
    /// Reuse an existing output directory instead of failing.
    pub overwrite: bool,
    pub seed: u64,
    /// Report progress every this many generations.
    pub log_every: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 500,
            outdir: "out".to_string(),
            overwrite: false,
            seed: 0,
            log_every: 100,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), ArboretumError> {
        if self.generations == 0 {
            return Err(ArboretumError::Configuration(
                "generations must be at least 1".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(ArboretumError::Configuration(
                "log_every must be at least 1".to_string(),
            ));
        }
        if self.outdir.is_empty() {
            return Err(ArboretumError::Configuration(
                "outdir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
