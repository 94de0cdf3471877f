use log::warn;
use rand::Rng;

use crate::engines::genetics::{Genome, GenomeSettings, Symbol};
use crate::engines::spatial::{self, GrowthSettings, LatticePos, Segment};
use crate::error::{ArboretumError, Result};

/// One organism: a genome, the seedling it sprouts from, and the body
/// developed from it. Spatial growth fills in `segments` and `seeds`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub genome: Genome,
    pub seedling: Vec<Symbol>,
    pub body: Vec<Symbol>,
    pub development_stage: u32,
    pub maturity: u32,
    pub growth: GrowthSettings,
    pub segments: Vec<Segment>,
    pub seeds: Vec<LatticePos>,
}

impl Tree {
    pub fn new(
        seedling: Vec<Symbol>,
        genome: Genome,
        maturity: u32,
        growth: GrowthSettings,
    ) -> Self {
        Self {
            body: seedling.clone(),
            seedling,
            genome,
            development_stage: 0,
            maturity,
            growth,
            segments: Vec::new(),
            seeds: Vec::new(),
        }
    }

    /// Creates a tree with a randomized genome and a one-gene seedling.
    pub fn random<R: Rng>(
        genome_settings: &GenomeSettings,
        maturity: u32,
        growth: GrowthSettings,
        rng: &mut R,
    ) -> Result<Self> {
        let genome = Genome::random(genome_settings, rng)?;
        let seedling = vec![Symbol::Gene(genome.random_gene(rng))];
        Ok(Self::new(seedling, genome, maturity, growth))
    }

    /// Clones the pre-growth state: genome and seedling only. The clone
    /// shares no mutable state with this tree.
    pub fn germinate(&self) -> Tree {
        Tree::new(
            self.seedling.clone(),
            self.genome.clone(),
            self.maturity,
            self.growth,
        )
    }

    /// Applies `steps` parallel rewriting passes to the body. Requests that
    /// would push the organism past maturity are clamped with a warning.
    pub fn develop(&mut self, steps: u32) -> Result<()> {
        let remaining = self.maturity - self.development_stage;
        let steps = if steps > remaining {
            warn!(
                "development request of {} steps exceeds maturity {}, clamping to {}",
                steps, self.maturity, remaining
            );
            remaining
        } else {
            steps
        };

        for _ in 0..steps {
            self.rewrite_pass()?;
        }
        Ok(())
    }

    /// Develops the body all the way to the maturity stage.
    pub fn develop_to_maturity(&mut self) -> Result<()> {
        self.develop(self.maturity - self.development_stage)
    }

    /// One parallel rewriting pass: every symbol is read from the prior
    /// body; symbols without a rule pass through unchanged, empty slots
    /// produce nothing.
    fn rewrite_pass(&mut self) -> Result<()> {
        let mut new_body = Vec::with_capacity(self.body.len());
        for symbol in &self.body {
            let gene = match symbol {
                Symbol::Gene(gene) => *gene,
                Symbol::Core(_) => {
                    new_body.push(*symbol);
                    continue;
                }
            };
            match self.genome.activation(gene) {
                // Gene symbols orphaned by deletion stay in place.
                None => new_body.push(*symbol),
                Some(activation) => {
                    if activation.len() != self.genome.activation_length() {
                        return Err(ArboretumError::MalformedRule {
                            gene: gene.to_string(),
                            expected: self.genome.activation_length(),
                            actual: activation.len(),
                        });
                    }
                    new_body.extend(activation.iter().flatten());
                }
            }
        }
        self.body = new_body;
        self.development_stage += 1;
        Ok(())
    }

    /// Interprets the body spatially, replacing any previous geometry.
    pub fn grow(&mut self) {
        let result = spatial::grow(&self.body, &self.growth);
        self.segments = result.segments;
        self.seeds = result.seeds;
    }

    /// Seed count surviving collision pruning.
    pub fn fitness(&self) -> f64 {
        self.seeds.len() as f64
    }

    /// Body tokens with every gene symbol rendered as the growth mark, the
    /// form consumed by external L-system viewers.
    pub fn translated_body(&self) -> Vec<String> {
        self.body
            .iter()
            .map(|symbol| match symbol {
                Symbol::Core(core) => core.token().to_string(),
                Symbol::Gene(_) => "F".to_string(),
            })
            .collect()
    }
}
