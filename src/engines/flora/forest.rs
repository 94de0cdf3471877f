use rand::Rng;

use crate::engines::genetics::GenomeSettings;
use crate::engines::spatial::GrowthSettings;
use crate::error::{ArboretumError, Result};

use super::tree::Tree;

/// Per-generation statistics, reported through the progress callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    pub mean_fitness: f64,
    pub best_fitness: f64,
    pub best_ever_fitness: f64,
    pub mean_genome_size: f64,
}

/// A population of trees plus the two retained best individuals. The live
/// population is replaced wholesale every generation; the fittest slots
/// are full clones that persist across the whole run.
#[derive(Debug, Clone)]
pub struct Forest {
    pub population: Vec<Tree>,
    pub total_fitness: f64,
    pub fittest_ever: Tree,
    pub fittest_currently: Tree,
}

impl Forest {
    /// Creates a forest of `n` randomized trees.
    pub fn new<R: Rng>(
        n: usize,
        maturity: u32,
        genome_settings: &GenomeSettings,
        growth: GrowthSettings,
        rng: &mut R,
    ) -> Result<Self> {
        if n == 0 {
            return Err(ArboretumError::Configuration(
                "population size must be at least 1".to_string(),
            ));
        }
        let mut population = Vec::with_capacity(n);
        for _ in 0..n {
            population.push(Tree::random(genome_settings, maturity, growth, rng)?);
        }
        let fittest = population[0].clone();
        Ok(Self {
            population,
            total_fitness: 0.0,
            fittest_ever: fittest.clone(),
            fittest_currently: fittest,
        })
    }

    /// One evolutionary generation: develop, grow, mutate, evaluate,
    /// select, germinate, replace. Mutation runs after fitness evaluation,
    /// so mutated genomes only shape the next generation's development.
    pub fn evolve<R: Rng>(&mut self, rng: &mut R) -> Result<GenerationSummary> {
        for tree in &mut self.population {
            tree.develop_to_maturity()?;
            tree.grow();
        }
        for tree in &mut self.population {
            tree.genome.mutate(rng);
        }

        self.total_fitness = self.population.iter().map(Tree::fitness).sum();

        let mut new_population = Vec::with_capacity(self.population.len());
        let mut best_selected = 0;
        for slot in 0..self.population.len() {
            let idx = self.select_parent(rng)?;
            new_population.push(self.population[idx].germinate());
            if slot == 0 || self.population[idx].fitness() > self.population[best_selected].fitness()
            {
                best_selected = idx;
            }
        }

        self.fittest_currently = self.population[best_selected].clone();
        if self.fittest_currently.fitness() > self.fittest_ever.fitness() {
            self.fittest_ever = self.fittest_currently.clone();
        }

        let n = self.population.len() as f64;
        let mean_genome_size = self
            .population
            .iter()
            .map(|tree| tree.genome.len() as f64)
            .sum::<f64>()
            / n;
        let summary = GenerationSummary {
            mean_fitness: self.total_fitness / n,
            best_fitness: self.fittest_currently.fitness(),
            best_ever_fitness: self.fittest_ever.fitness(),
            mean_genome_size,
        };

        self.population = new_population;
        Ok(summary)
    }

    /// Fitness-proportionate selection. Every tree carries weight
    /// `fitness + 1`, so zero-fitness organisms stay selectable; the draw
    /// is bounded by the raw fitness total, which the smoothed weights
    /// always exceed. Exhausting the walk means the bookkeeping is
    /// inconsistent and is a fatal error.
    pub fn select_parent<R: Rng>(&self, rng: &mut R) -> Result<usize> {
        let mut r = self.total_fitness * rng.gen::<f64>();
        for (idx, tree) in self.population.iter().enumerate() {
            let weight = tree.fitness() + 1.0;
            if r < weight {
                return Ok(idx);
            }
            r -= weight;
        }
        Err(ArboretumError::Selection(format!(
            "weighted walk exhausted the population (total fitness {})",
            self.total_fitness
        )))
    }
}
