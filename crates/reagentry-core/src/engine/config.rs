use crate::core::validation::FINGERPRINT_SEPARATOR;
use thiserror::Error;

pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Upper bound (exclusive) for [`ResolverConfig::tolerance`].
pub const MAX_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Relative slack allowed when comparing an available quantity against a requirement: a
    /// reactant needing `q` is satisfied by anything at or above `q * (1 - tolerance)`, and a
    /// leftover within `q * tolerance` of zero is snapped to zero.
    pub tolerance: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub base_version: String,
    pub resolver: ResolverConfig,
    /// Fold a digest of the registered content into the fingerprint, so installations whose
    /// extensions share identifiers but ship different content do not match.
    pub include_content_digest: bool,
}

impl EngineConfig {
    pub fn new(base_version: impl Into<String>) -> Self {
        Self {
            base_version: base_version.into(),
            resolver: ResolverConfig::default(),
            include_content_digest: false,
        }
    }
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    base_version: Option<String>,
    tolerance: Option<f64>,
    include_content_digest: Option<bool>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_version(mut self, version: impl Into<String>) -> Self {
        self.base_version = Some(version.into());
        self
    }
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn include_content_digest(mut self, include: bool) -> Self {
        self.include_content_digest = Some(include);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let base_version = self
            .base_version
            .ok_or(ConfigError::MissingParameter("base_version"))?;
        if base_version.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "base_version",
                reason: "must not be empty".to_string(),
            });
        }
        if base_version.contains(FINGERPRINT_SEPARATOR) {
            return Err(ConfigError::InvalidParameter {
                name: "base_version",
                reason: format!("must not contain '{FINGERPRINT_SEPARATOR}'"),
            });
        }

        let tolerance = self.tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !(0.0..MAX_TOLERANCE).contains(&tolerance) {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                reason: format!("expected a number in [0, {MAX_TOLERANCE}), got {tolerance}"),
            });
        }

        Ok(EngineConfig {
            base_version,
            resolver: ResolverConfig { tolerance },
            include_content_digest: self.include_content_digest.unwrap_or(false),
        })
    }
}
