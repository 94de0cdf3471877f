pub mod config;
pub mod engines;
pub mod error;
pub mod export;
pub mod model;
pub mod progress;

pub use error::{ArboretumError, Result};
pub use model::Model;
