use crate::core::models::reaction::{Reaction, ReagentAmount};
use crate::core::models::substance::{Color, Substance};
use crate::core::registry::reactions::ReactionRegistry;
use crate::core::registry::substances::SubstanceRegistry;
use sha2::{Digest, Sha256};
use std::fmt;

const SHORT_LEN: usize = 16;

/// SHA-256 over the canonical encoding of every registered substance (in name order) and
/// reaction (in registration order).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn of(substances: &SubstanceRegistry, reactions: &ReactionRegistry) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"substances");
        hasher.update((substances.len() as u64).to_le_bytes());
        for substance in substances.all() {
            hash_substance(&mut hasher, substance);
        }
        hasher.update(b"reactions");
        hasher.update((reactions.len() as u64).to_le_bytes());
        for (_, reaction) in reactions.all() {
            hash_reaction(&mut hasher, reaction);
        }
        Self(hex::encode(hasher.finalize()))
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// First 16 hex characters, compact enough to append to a version string.
    pub fn short(&self) -> &str {
        &self.0[..SHORT_LEN]
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn hash_f64(hasher: &mut Sha256, value: f64) {
    hasher.update(value.to_bits().to_le_bytes());
}

fn hash_color(hasher: &mut Sha256, color: &Color) {
    for component in color.components() {
        hasher.update(component.to_bits().to_le_bytes());
    }
}

fn hash_substance(hasher: &mut Sha256, substance: &Substance) {
    hash_str(hasher, substance.name());
    hash_str(hasher, substance.display_name.as_str());
    hash_color(hasher, &substance.color);
    hash_color(hasher, &substance.emission);
    hash_f64(hasher, substance.value);
    hash_f64(hasher, substance.half_life);
    hasher.update([u8::from(substance.cleaning_agent)]);
    match substance.display.as_str() {
        Some(handle) => {
            hasher.update([1u8]);
            hash_str(hasher, handle);
        }
        None => hasher.update([0u8]),
    }
    hash_str(hasher, substance.consumption.name());
}

fn hash_amount(hasher: &mut Sha256, amount: &ReagentAmount) {
    hash_str(hasher, &amount.substance);
    hash_f64(hasher, amount.quantity);
}

fn hash_reaction(hasher: &mut Sha256, reaction: &Reaction) {
    hasher.update((reaction.reactants().len() as u64).to_le_bytes());
    for reactant in reaction.reactants() {
        hash_amount(hasher, reactant);
    }
    hash_amount(hasher, reaction.product());
}
