use super::config::ConfigError;
use crate::core::io::manifest::ManifestLoadError;
use crate::core::registry::reactions::ReactionError;
use crate::core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid registration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rejected reaction: {0}")]
    Reaction(#[from] ReactionError),

    #[error("Content pack could not be loaded: {0}")]
    Manifest(#[from] ManifestLoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
