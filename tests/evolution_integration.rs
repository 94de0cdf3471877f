use arboretum::config::AppConfig;
use arboretum::engines::flora::{Forest, GenerationSummary};
use arboretum::engines::genetics::{GenomeSettings, MutationRates};
use arboretum::engines::spatial::GrowthSettings;
use arboretum::progress::{ProgressCallback, SilentProgress};
use arboretum::Model;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_config(seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.generations = 5;
    config.simulation.seed = seed;
    config.simulation.log_every = 1;
    config.forest.population_size = 20;
    config.tree.maturity = 4;
    config.genome.start_size = 5;
    config.genome.max_size = 30;
    config
}

fn genome_settings() -> GenomeSettings {
    GenomeSettings {
        start_size: 5,
        max_size: 30,
        activation_length: 2,
        rates: MutationRates {
            substitution: 0.05,
            duplication: 0.005,
            deletion: 0.005,
            core_gene_substitution: 0.5,
        },
    }
}

struct RecordingProgress {
    summaries: Vec<GenerationSummary>,
}

impl ProgressCallback for RecordingProgress {
    fn on_generation_complete(&mut self, _generation: usize, summary: &GenerationSummary) {
        self.summaries.push(*summary);
    }
}

#[test]
fn test_run_completes_and_replaces_the_population() {
    let mut model = Model::new(test_config(7)).unwrap();
    model.run(&mut SilentProgress).unwrap();

    let forest = model.forest();
    assert_eq!(forest.population.len(), 20);
    // The live population holds freshly germinated organisms.
    for tree in &forest.population {
        assert_eq!(tree.development_stage, 0);
        assert!(tree.segments.is_empty());
    }
}

#[test]
fn test_population_of_one_always_selects_the_sole_organism() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut forest = Forest::new(
        1,
        3,
        &genome_settings(),
        GrowthSettings::default(),
        &mut rng,
    )
    .unwrap();

    // Zero total fitness: the +1 smoothing still selects the organism.
    for _ in 0..20 {
        assert_eq!(forest.select_parent(&mut rng).unwrap(), 0);
    }

    forest.evolve(&mut rng).unwrap();
    assert_eq!(forest.population.len(), 1);
}

#[test]
fn test_fittest_ever_is_monotonically_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut forest = Forest::new(
        15,
        4,
        &genome_settings(),
        GrowthSettings::default(),
        &mut rng,
    )
    .unwrap();

    let mut best_ever = 0.0;
    for _ in 0..10 {
        let summary = forest.evolve(&mut rng).unwrap();
        assert!(
            summary.best_ever_fitness >= best_ever,
            "best-ever fitness regressed from {} to {}",
            best_ever,
            summary.best_ever_fitness
        );
        assert!(summary.best_fitness >= 0.0);
        best_ever = summary.best_ever_fitness;
        assert_eq!(forest.fittest_ever.fitness(), best_ever);
    }
}

#[test]
fn test_germination_is_a_deep_copy() {
    use arboretum::engines::flora::Tree;

    let mut rng = StdRng::seed_from_u64(17);
    let settings = GenomeSettings {
        rates: MutationRates {
            substitution: 1.0,
            duplication: 0.5,
            deletion: 0.5,
            core_gene_substitution: 0.5,
        },
        ..genome_settings()
    };
    let parent = Tree::random(&settings, 4, GrowthSettings::default(), &mut rng).unwrap();
    let snapshot = parent.genome.clone();

    let mut clone = parent.germinate();
    assert_eq!(clone.seedling, parent.seedling);
    for _ in 0..50 {
        clone.genome.mutate(&mut rng);
    }

    assert_eq!(parent.genome, snapshot, "mutating the clone touched the parent");
}

#[test]
fn test_runs_are_reproducible_from_a_fixed_seed() {
    let mut first = Model::new(test_config(99)).unwrap();
    let mut first_log = RecordingProgress { summaries: vec![] };
    first.run(&mut first_log).unwrap();

    let mut second = Model::new(test_config(99)).unwrap();
    let mut second_log = RecordingProgress { summaries: vec![] };
    second.run(&mut second_log).unwrap();

    assert_eq!(first_log.summaries, second_log.summaries);
    assert_eq!(first.fittest_ever().body, second.fittest_ever().body);
    assert_eq!(first.fittest_ever().genome, second.fittest_ever().genome);
    assert_eq!(first.fittest_ever().seeds, second.fittest_ever().seeds);
}

#[test]
fn test_fitness_equals_surviving_seed_count() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut forest = Forest::new(
        10,
        4,
        &genome_settings(),
        GrowthSettings::default(),
        &mut rng,
    )
    .unwrap();
    forest.evolve(&mut rng).unwrap();

    let fittest = &forest.fittest_currently;
    assert_eq!(fittest.fitness(), fittest.seeds.len() as f64);
}
