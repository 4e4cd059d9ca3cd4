use crate::core::validation::{ValidationError, validate_name, validate_quantity};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Position of a reaction in the registry; doubles as its stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReactionId(pub(crate) usize);

impl ReactionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ReactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReagentAmount {
    pub substance: String,
    pub quantity: f64,
}

impl ReagentAmount {
    pub fn new(substance: impl Into<String>, quantity: f64) -> Self {
        Self {
            substance: substance.into(),
            quantity,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.substance)?;
        validate_quantity(&self.substance, self.quantity)
    }
}

impl<S: Into<String>> From<(S, f64)> for ReagentAmount {
    fn from((substance, quantity): (S, f64)) -> Self {
        Self::new(substance, quantity)
    }
}

impl fmt::Display for ReagentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.substance)
    }
}

/// Consumes the listed reactant quantities to produce one product quantity.
///
/// Yields need not conserve volume: `1.0 Water + 0.1 Love -> 1.0 Sweat` is a valid rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    reactants: Vec<ReagentAmount>,
    product: ReagentAmount,
}

impl Reaction {
    pub fn new(reactants: Vec<ReagentAmount>, product: ReagentAmount) -> Self {
        Self { reactants, product }
    }

    pub fn reactants(&self) -> &[ReagentAmount] {
        &self.reactants
    }

    pub fn product(&self) -> &ReagentAmount {
        &self.product
    }

    /// Every substance name the reaction touches: reactants in order, then the product.
    pub fn substance_names(&self) -> impl Iterator<Item = &str> {
        self.reactants
            .iter()
            .chain(std::iter::once(&self.product))
            .map(|amount| amount.substance.as_str())
    }

    /// Checks the shape of the reaction, independent of any registry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reactants.is_empty() {
            return Err(ValidationError::NoReactants);
        }
        let mut seen = HashSet::with_capacity(self.reactants.len());
        for reactant in &self.reactants {
            reactant.validate()?;
            if !seen.insert(reactant.substance.as_str()) {
                return Err(ValidationError::DuplicateReactant(
                    reactant.substance.clone(),
                ));
            }
        }
        self.product.validate()
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reactant) in self.reactants.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{reactant}")?;
        }
        write!(f, " -> {}", self.product)
    }
}
