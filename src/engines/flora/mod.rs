pub mod forest;
pub mod tree;

pub use forest::{Forest, GenerationSummary};
pub use tree::Tree;
