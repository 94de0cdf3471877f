use super::traits::{check_rate, ConfigSection};
use crate::engines::genetics::{GenomeSettings, MutationRates};
use crate::error::ArboretumError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenomeConfig {
    pub start_size: usize,
    pub max_size: usize,
    /// Slots per activation rule, usually 2 or 3.
    pub activation_length: usize,
    pub mut_sub_rate: f64,
    pub mut_dup_rate: f64,
    pub mut_del_rate: f64,
    pub core_gene_substitution_chance: f64,
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            start_size: 10,
            max_size: 100,
            activation_length: 2,
            mut_sub_rate: 0.05,
            mut_dup_rate: 0.005,
            mut_del_rate: 0.005,
            core_gene_substitution_chance: 0.5,
        }
    }
}

impl GenomeConfig {
    pub fn genome_settings(&self) -> GenomeSettings {
        GenomeSettings {
            start_size: self.start_size,
            max_size: self.max_size,
            activation_length: self.activation_length,
            rates: MutationRates {
                substitution: self.mut_sub_rate,
                duplication: self.mut_dup_rate,
                deletion: self.mut_del_rate,
                core_gene_substitution: self.core_gene_substitution_chance,
            },
        }
    }
}

impl ConfigSection for GenomeConfig {
    fn section_name() -> &'static str {
        "genome"
    }

    fn validate(&self) -> Result<(), ArboretumError> {
        if self.start_size == 0 {
            return Err(ArboretumError::Configuration(
                "genome start size must be at least 1".to_string(),
            ));
        }
        if self.start_size > self.max_size {
            return Err(ArboretumError::Configuration(format!(
                "genome start size {} exceeds maximum {}",
                self.start_size, self.max_size
            )));
        }
        if !(2..=3).contains(&self.activation_length) {
            return Err(ArboretumError::Configuration(format!(
                "activation length must be 2 or 3, got {}",
                self.activation_length
            )));
        }
        check_rate("substitution rate", self.mut_sub_rate)?;
        check_rate("duplication rate", self.mut_dup_rate)?;
        check_rate("deletion rate", self.mut_del_rate)?;
        check_rate(
            "core gene substitution chance",
            self.core_gene_substitution_chance,
        )?;
        Ok(())
    }
}
