use arboretum::config::{AppConfig, ConfigManager};
use arboretum::engines::flora::Tree;
use arboretum::engines::genetics::{
    Activation, CoreSymbol, GeneId, Genome, GenomeSettings, MutationRates, Symbol,
};
use arboretum::engines::spatial::GrowthSettings;
use arboretum::export::{obj, text};
use std::collections::BTreeMap;

fn sample_tree() -> Tree {
    let settings = GenomeSettings {
        start_size: 1,
        max_size: 10,
        activation_length: 2,
        rates: MutationRates {
            substitution: 0.0,
            duplication: 0.0,
            deletion: 0.0,
            core_gene_substitution: 0.5,
        },
    };
    let mut rules: BTreeMap<GeneId, Activation> = BTreeMap::new();
    rules.insert(
        GeneId(0),
        vec![Some(Symbol::Core(CoreSymbol::RotXPos)), None],
    );
    let genome = Genome::from_rules(rules, &settings).unwrap();
    let mut tree = Tree::new(
        vec![
            Symbol::Core(CoreSymbol::Growth),
            Symbol::Gene(GeneId(0)),
            Symbol::Core(CoreSymbol::Seed),
        ],
        genome,
        1,
        GrowthSettings::default(),
    );
    tree.grow();
    tree
}

#[test]
fn test_default_config_validates() {
    AppConfig::default().validate().unwrap();
}

#[test]
fn test_invalid_sections_are_rejected() {
    let mut config = AppConfig::default();
    config.genome.mut_sub_rate = 1.5;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.genome.start_size = 200;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.genome.activation_length = 4;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.forest.population_size = 0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.simulation.generations = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_manager_loads_a_toml_file() {
    let path = std::env::temp_dir().join(format!("arboretum_cfg_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[forest]\npopulation_size = 42\n\n[tree]\nmaturity = 3\n",
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get();
    assert_eq!(config.forest.population_size, 42);
    assert_eq!(config.tree.maturity, 3);
    // Untouched sections keep their defaults.
    assert_eq!(config.genome.max_size, 100);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_genome_dump_renders_rules_and_empty_slots() {
    let tree = sample_tree();
    assert_eq!(text::genome_as_text(&tree.genome), "A -> x+ | \n");
}

#[test]
fn test_body_dumps() {
    let tree = sample_tree();
    assert_eq!(text::body_as_text(&tree), "F,A,*");
    // Gene symbols translate to the growth mark for external viewers.
    assert_eq!(text::translated_body_as_text(&tree), "F,F,*");
}

#[test]
fn test_obj_meshes_use_one_based_indices() {
    let tree = sample_tree();
    let mesh = obj::segments_as_obj(&tree.segments, tree.growth.collision_precision);
    let lines: Vec<&str> = mesh.lines().collect();
    // Two segments: F from the origin, then the unexpanded gene symbol.
    let vertex_count = lines.iter().filter(|l| l.starts_with("v ")).count();
    let edge_count = lines.iter().filter(|l| l.starts_with("l ")).count();
    assert_eq!(vertex_count, 2 * tree.segments.len());
    assert_eq!(edge_count, tree.segments.len());
    assert_eq!(lines[vertex_count], "l 1 2");

    let seeds = obj::seeds_as_obj(&tree.seeds, tree.growth.collision_precision);
    assert_eq!(
        seeds.lines().filter(|l| l.starts_with("v ")).count(),
        tree.seeds.len()
    );
}
