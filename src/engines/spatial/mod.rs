pub mod lattice;
pub mod turtle;

pub use lattice::{LatticePos, Point, Segment};
pub use turtle::{grow, GrowthResult, GrowthSettings};
