pub mod genome;
pub mod symbol;

pub use genome::{Activation, Genome, GenomeSettings, MutationRates};
pub use symbol::{CoreSymbol, GeneId, Symbol};
