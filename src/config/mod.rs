pub mod forest;
pub mod genome;
pub mod manager;
pub mod simulation;
pub mod traits;
pub mod tree;

pub use forest::ForestConfig;
pub use genome::GenomeConfig;
pub use manager::{AppConfig, ConfigManager};
pub use simulation::SimulationConfig;
pub use tree::TreeConfig;
