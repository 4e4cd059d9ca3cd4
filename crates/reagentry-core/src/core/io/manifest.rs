use crate::core::models::consumption::ConsumptionBehavior;
use crate::core::models::reaction::{Reaction, ReagentAmount};
use crate::core::models::substance::{Color, DisplayHandle, Substance};
use crate::core::validation::ValidationError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtensionInfo {
    pub id: String,
    pub name: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LocalizationEntry {
    pub key: String,
    pub default: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ConsumptionEntry {
    DefaultEnergyFill,
    Custom(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct SubstanceEntry {
    pub name: String,
    pub display_name: Option<String>,
    pub color: Option<Color>,
    pub emission: Option<Color>,
    pub value: Option<f64>,
    pub half_life: Option<f64>,
    pub cleaning_agent: Option<bool>,
    pub display: Option<String>,
    pub consumption: Option<ConsumptionEntry>,
}

impl SubstanceEntry {
    /// Builds the substance, resolving a custom consumption handler by name through
    /// `resolve_handler`. Unset fields keep the [`Substance::new`] defaults.
    pub fn to_substance<F>(&self, resolve_handler: F) -> Result<Substance, ValidationError>
    where
        F: Fn(&str) -> Option<ConsumptionBehavior>,
    {
        let mut substance = Substance::new(self.name.clone());
        if let Some(key) = &self.display_name {
            substance.display_name = key.as_str().into();
        }
        if let Some(color) = self.color {
            substance.color = color;
        }
        if let Some(emission) = self.emission {
            substance.emission = emission;
        }
        if let Some(value) = self.value {
            substance.value = value;
        }
        if let Some(half_life) = self.half_life {
            substance.half_life = half_life;
        }
        if let Some(cleaning_agent) = self.cleaning_agent {
            substance.cleaning_agent = cleaning_agent;
        }
        if let Some(display) = &self.display {
            substance.display = DisplayHandle::new(display.clone());
        }
        match &self.consumption {
            None | Some(ConsumptionEntry::DefaultEnergyFill) => {}
            Some(ConsumptionEntry::Custom(name)) => {
                substance.consumption = resolve_handler(name)
                    .ok_or_else(|| ValidationError::UnknownConsumptionHandler(name.clone()))?;
            }
        }
        substance.validate()?;
        Ok(substance)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReactionEntry {
    pub reactants: Vec<ReagentAmount>,
    pub product: ReagentAmount,
}

impl From<&ReactionEntry> for Reaction {
    fn from(entry: &ReactionEntry) -> Self {
        Reaction::new(entry.reactants.clone(), entry.product.clone())
    }
}

/// One extension's declarative contributions.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContentPack {
    pub extension: ExtensionInfo,
    #[serde(default)]
    pub localization: Vec<LocalizationEntry>,
    #[serde(default)]
    pub substances: Vec<SubstanceEntry>,
    #[serde(default)]
    pub reactions: Vec<ReactionEntry>,
}

impl ContentPack {
    pub fn load(path: &Path) -> Result<Self, ManifestLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ManifestLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| ManifestLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[derive(Debug, Error)]
pub enum ManifestLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
