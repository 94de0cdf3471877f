use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ArboretumError, Result};

use super::symbol::{CoreSymbol, GeneId, Symbol};

/// An activation rule: fixed-length list of production slots. `None` is an
/// explicitly empty slot and produces nothing during development.
pub type Activation = Vec<Option<Symbol>>;

/// Per-rule mutation probabilities, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationRates {
    pub substitution: f64,
    pub duplication: f64,
    pub deletion: f64,
    /// Chance that a substituted symbol is drawn from the core set instead
    /// of the currently existing gene identifiers.
    pub core_gene_substitution: f64,
}

/// Everything needed to build and mutate a genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeSettings {
    pub start_size: usize,
    pub max_size: usize,
    pub activation_length: usize,
    pub rates: MutationRates,
}

/// A genome maps gene identifiers to their activation rules.
///
/// Rules are held in a `BTreeMap` so iteration order is deterministic; with
/// a fixed RNG seed this makes random gene draws and text dumps
/// reproducible run over run.
///
/// Invariants: identifiers are pairwise distinct (map keys), every rule has
/// exactly `activation_length` slots, and the rule count stays within
/// `1..=max_size` through any sequence of mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    rules: BTreeMap<GeneId, Activation>,
    /// Identifiers ever allocated. Never decremented; freed identifiers are
    /// recycled by scanning below this counter.
    allocated: u32,
    max_size: usize,
    activation_length: usize,
    rates: MutationRates,
}

impl Genome {
    /// Creates a randomized genome of `start_size` rules. Each slot is a
    /// core symbol with probability `core_gene_substitution`, otherwise a
    /// randomly chosen existing gene identifier.
    pub fn random<R: Rng>(settings: &GenomeSettings, rng: &mut R) -> Result<Self> {
        if settings.start_size == 0 {
            return Err(ArboretumError::Configuration(
                "genome must start with at least one rule".to_string(),
            ));
        }
        if settings.start_size > settings.max_size {
            return Err(ArboretumError::Configuration(format!(
                "genome size {} exceeds maximum {}",
                settings.start_size, settings.max_size
            )));
        }

        let mut genome = Self {
            rules: BTreeMap::new(),
            allocated: 0,
            max_size: settings.max_size,
            activation_length: settings.activation_length,
            rates: settings.rates,
        };
        for _ in 0..settings.start_size {
            let id = GeneId(genome.allocated);
            genome.allocated += 1;
            genome.rules.insert(id, vec![None; settings.activation_length]);
        }
        // Second pass: fill the rules now that the full key set is in place,
        // so gene draws can reference any identifier in the genome.
        let ids: Vec<GeneId> = genome.rules.keys().copied().collect();
        for id in ids {
            let activation: Activation = (0..settings.activation_length)
                .map(|_| Some(genome.random_symbol(rng)))
                .collect();
            genome.rules.insert(id, activation);
        }
        Ok(genome)
    }

    /// Builds a genome from explicit rules. Fails on an empty rule set, on
    /// more rules than `max_size`, or on any rule whose slot count differs
    /// from `activation_length`.
    pub fn from_rules(
        rules: BTreeMap<GeneId, Activation>,
        settings: &GenomeSettings,
    ) -> Result<Self> {
        if rules.is_empty() {
            return Err(ArboretumError::Configuration(
                "genome must hold at least one rule".to_string(),
            ));
        }
        if rules.len() > settings.max_size {
            return Err(ArboretumError::Configuration(format!(
                "genome size {} exceeds maximum {}",
                rules.len(),
                settings.max_size
            )));
        }
        for (id, activation) in &rules {
            if activation.len() != settings.activation_length {
                return Err(ArboretumError::MalformedRule {
                    gene: id.to_string(),
                    expected: settings.activation_length,
                    actual: activation.len(),
                });
            }
        }
        let allocated = rules.keys().last().map_or(0, |id| id.0 + 1);
        Ok(Self {
            rules,
            allocated,
            max_size: settings.max_size,
            activation_length: settings.activation_length,
            rates: settings.rates,
        })
    }

    /// Returns the activation rule for a gene symbol, or `None` when the
    /// symbol is unknown (a core symbol, or a gene orphaned by deletion).
    /// Callers must leave unknown symbols unchanged.
    pub fn activation(&self, gene: GeneId) -> Option<&[Option<Symbol>]> {
        self.rules.get(&gene).map(|a| a.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn activation_length(&self) -> usize {
        self.activation_length
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GeneId, &Activation)> {
        self.rules.iter()
    }

    /// Picks a random identifier among the currently existing rules.
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> GeneId {
        let idx = rng.gen_range(0..self.rules.len());
        // rules is never empty, so the nth key exists
        *self.rules.keys().nth(idx).unwrap()
    }

    fn random_symbol<R: Rng>(&self, rng: &mut R) -> Symbol {
        if rng.gen::<f64>() < self.rates.core_gene_substitution {
            Symbol::Core(CoreSymbol::ALL[rng.gen_range(0..CoreSymbol::ALL.len())])
        } else {
            Symbol::Gene(self.random_gene(rng))
        }
    }

    /// Applies the three mutation operators in fixed order. Deletion runs
    /// before duplication so identifiers it frees are available for reuse;
    /// substitution runs first so mutated rules can be deleted or
    /// duplicated in the same pass.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        self.substitute(rng);
        self.delete(rng);
        self.duplicate(rng);
    }

    fn substitute<R: Rng>(&mut self, rng: &mut R) {
        let ids: Vec<GeneId> = self.rules.keys().copied().collect();
        for id in ids {
            if rng.gen::<f64>() > self.rates.substitution {
                continue;
            }
            let symbol = self.random_symbol(rng);
            let slot = rng.gen_range(0..self.activation_length);
            if let Some(activation) = self.rules.get_mut(&id) {
                activation[slot] = Some(symbol);
            }
        }
    }

    fn delete<R: Rng>(&mut self, rng: &mut R) {
        if self.rules.len() == 1 {
            return;
        }

        let mut removed: Vec<GeneId> = Vec::new();
        for id in self.rules.keys().copied().collect::<Vec<_>>() {
            // Never mark the last surviving rule.
            if self.rules.len() - removed.len() <= 1 {
                break;
            }
            if rng.gen::<f64>() > self.rates.deletion {
                continue;
            }
            removed.push(id);
        }
        if removed.is_empty() {
            return;
        }

        // Literal occurrences of a removed identifier become empty slots;
        // reachability is not cascaded.
        for activation in self.rules.values_mut() {
            for slot in activation.iter_mut() {
                if matches!(slot, Some(Symbol::Gene(gene)) if removed.contains(gene)) {
                    *slot = None;
                }
            }
        }
        for id in &removed {
            self.rules.remove(id);
        }
    }

    fn duplicate<R: Rng>(&mut self, rng: &mut R) {
        if self.rules.len() >= self.max_size {
            return;
        }

        // Snapshot so freshly inserted copies are not themselves duplicated.
        let snapshot: Vec<Activation> = self.rules.values().cloned().collect();
        for activation in snapshot {
            if self.rules.len() >= self.max_size {
                break;
            }
            if rng.gen::<f64>() > self.rates.duplication {
                continue;
            }
            let id = self.next_free_id();
            self.rules.insert(id, activation);
        }
    }

    /// Recycles the lowest identifier freed by deletion, allocating a fresh
    /// one only when every ever-allocated identifier is in use.
    fn next_free_id(&mut self) -> GeneId {
        for c in 0..self.allocated {
            let id = GeneId(c);
            if !self.rules.contains_key(&id) {
                return id;
            }
        }
        let id = GeneId(self.allocated);
        self.allocated += 1;
        id
    }
}
