use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArboretumError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Malformed rule for gene {gene}: expected {expected} slots, got {actual}")]
    MalformedRule {
        gene: String,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArboretumError>;
