use crate::error::ArboretumError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), ArboretumError>;
}

pub(crate) fn check_rate(name: &str, rate: f64) -> Result<(), ArboretumError> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(ArboretumError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, rate
        )));
    }
    Ok(())
}
