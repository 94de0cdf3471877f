use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use crate::config::AppConfig;
use crate::engines::flora::{Forest, Tree};
use crate::error::Result;
use crate::export;
use crate::progress::ProgressCallback;

/// Owns the configuration, the population, and the single RNG stream every
/// stochastic operation draws from. One stream plus a fixed iteration order
/// is what makes a run reproducible from a seed.
pub struct Model {
    config: AppConfig,
    forest: Forest,
    rng: StdRng,
}

impl Model {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.simulation.seed {
            0 => StdRng::from_entropy(),
            seed => StdRng::seed_from_u64(seed),
        };
        let forest = Forest::new(
            config.forest.population_size,
            config.tree.maturity,
            &config.genome.genome_settings(),
            config.tree.growth_settings(),
            &mut rng,
        )?;
        Ok(Self {
            config,
            forest,
            rng,
        })
    }

    /// Runs the configured number of generations.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<()> {
        for generation in 0..self.config.simulation.generations {
            let summary = self.forest.evolve(&mut self.rng)?;
            callback.on_generation_complete(generation, &summary);
        }
        Ok(())
    }

    /// Writes the fittest-ever tree's dump under the configured outdir.
    pub fn export_fittest(&self) -> Result<()> {
        export::write_tree(
            Path::new(&self.config.simulation.outdir),
            self.config.simulation.overwrite,
            &self.forest.fittest_ever,
        )
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn fittest_ever(&self) -> &Tree {
        &self.forest.fittest_ever
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
