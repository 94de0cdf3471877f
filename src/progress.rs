use log::info;

use crate::engines::flora::GenerationSummary;

/// Hook for observing the evolutionary run.
pub trait ProgressCallback {
    fn on_generation_complete(&mut self, generation: usize, summary: &GenerationSummary);
}

/// Reports through the `log` facade every `every` generations.
pub struct LogProgress {
    every: usize,
}

impl LogProgress {
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl ProgressCallback for LogProgress {
    fn on_generation_complete(&mut self, generation: usize, summary: &GenerationSummary) {
        if generation % self.every == 0 {
            info!(
                "generation {}: mean fitness {:.3}, best {:.0}, best ever {:.0}, mean genome size {:.1}",
                generation,
                summary.mean_fitness,
                summary.best_fitness,
                summary.best_ever_fitness,
                summary.mean_genome_size
            );
        }
    }
}

/// Callback that ignores everything; handy for tests and library callers.
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_generation_complete(&mut self, _generation: usize, _summary: &GenerationSummary) {}
}
