use crate::core::models::substance::Substance;
use crate::core::validation::ValidationError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct SubstanceRegistry {
    registry: BTreeMap<String, Substance>,
}

impl SubstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `substance`, or fully replaces the definition already registered under its name.
    ///
    /// Returns the replaced definition, if there was one.
    pub fn upsert(&mut self, substance: Substance) -> Result<Option<Substance>, ValidationError> {
        substance.validate()?;
        Ok(self
            .registry
            .insert(substance.name().to_string(), substance))
    }

    pub fn get(&self, name: &str) -> Option<&Substance> {
        self.registry.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// All substances, ordered by name.
    pub fn all(&self) -> impl Iterator<Item = &Substance> {
        self.registry.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registry.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
