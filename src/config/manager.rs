use super::{
    forest::ForestConfig, genome::GenomeConfig, simulation::SimulationConfig, traits::ConfigSection,
    tree::TreeConfig,
};
use crate::error::{ArboretumError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub forest: ForestConfig,
    pub tree: TreeConfig,
    pub genome: GenomeConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.forest.validate()?;
        self.tree.validate()?;
        self.genome.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Loads a TOML or JSON config file, picked by extension.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ArboretumError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents)
                .map_err(|e| ArboretumError::Configuration(format!("Failed to parse config: {}", e)))?,
            _ => toml::from_str(&contents)
                .map_err(|e| ArboretumError::Configuration(format!("Failed to parse config: {}", e)))?,
        };

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| ArboretumError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| ArboretumError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}
