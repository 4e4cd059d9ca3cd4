use super::substances::SubstanceRegistry;
use crate::core::models::reaction::{Reaction, ReactionId};
use crate::core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReactionError {
    #[error("Invalid reaction: {0}")]
    Validation(#[from] ValidationError),

    #[error("Reaction references unknown substance '{0}'")]
    UnknownSubstance(String),
}

#[derive(Debug, Clone, Default)]
pub struct ReactionRegistry {
    reactions: Vec<Reaction>,
}

impl ReactionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `reaction` after checking its shape and that every substance it names is
    /// already registered. A rejected reaction is dropped; it is never queued for retry.
    pub fn add(
        &mut self,
        reaction: Reaction,
        substances: &SubstanceRegistry,
    ) -> Result<ReactionId, ReactionError> {
        reaction.validate()?;
        if let Some(missing) = reaction
            .substance_names()
            .find(|name| !substances.contains(name))
        {
            return Err(ReactionError::UnknownSubstance(missing.to_string()));
        }
        let id = ReactionId(self.reactions.len());
        self.reactions.push(reaction);
        Ok(id)
    }

    pub fn get(&self, id: ReactionId) -> Option<&Reaction> {
        self.reactions.get(id.0)
    }

    /// All reactions in registration order.
    pub fn all(&self) -> impl ExactSizeIterator<Item = (ReactionId, &Reaction)> {
        self.reactions
            .iter()
            .enumerate()
            .map(|(index, reaction)| (ReactionId(index), reaction))
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::substance::Substance;

    fn substances(names: &[&str]) -> SubstanceRegistry {
        let mut registry = SubstanceRegistry::new();
        for name in names {
            registry.upsert(Substance::new(*name)).unwrap();
        }
        registry
    }

    fn sweat_reaction() -> Reaction {
        Reaction::new(
            vec![("Water", 1.0).into(), ("Love", 0.1).into()],
            ("Sweat", 1.0).into(),
        )
    }

    #[test]
    fn add_appends_valid_reaction() {
        let substances = substances(&["Water", "Love", "Sweat"]);
        let mut reactions = ReactionRegistry::new();
        let id = reactions.add(sweat_reaction(), &substances).unwrap();
        assert_eq!(id.index(), 0);
        assert_eq!(reactions.get(id), Some(&sweat_reaction()));
    }

    #[test]
    fn add_with_unknown_reactant_fails_and_leaves_length_unchanged() {
        let substances = substances(&["Water", "Sweat"]);
        let mut reactions = ReactionRegistry::new();
        let result = reactions.add(sweat_reaction(), &substances);
        assert_eq!(
            result,
            Err(ReactionError::UnknownSubstance("Love".to_string()))
        );
        assert_eq!(reactions.len(), 0);
    }

    #[test]
    fn add_with_unknown_product_fails() {
        let substances = substances(&["Water", "Love"]);
        let mut reactions = ReactionRegistry::new();
        let result = reactions.add(sweat_reaction(), &substances);
        assert_eq!(
            result,
            Err(ReactionError::UnknownSubstance("Sweat".to_string()))
        );
        assert!(reactions.is_empty());
    }

    #[test]
    fn add_reports_validation_errors_before_lookup() {
        let substances = substances(&[]);
        let mut reactions = ReactionRegistry::new();
        let result = reactions.add(Reaction::new(vec![], ("Sweat", 1.0).into()), &substances);
        assert_eq!(
            result,
            Err(ReactionError::Validation(ValidationError::NoReactants))
        );
    }

    #[test]
    fn dropped_reaction_is_not_retried_after_substance_appears() {
        let mut substances = substances(&["Water", "Sweat"]);
        let mut reactions = ReactionRegistry::new();
        assert!(reactions.add(sweat_reaction(), &substances).is_err());
        substances.upsert(Substance::new("Love")).unwrap();
        assert!(reactions.is_empty());
    }

    #[test]
    fn all_preserves_registration_order() {
        let substances = substances(&["Water", "Love", "Sweat", "Steam"]);
        let mut reactions = ReactionRegistry::new();
        reactions.add(sweat_reaction(), &substances).unwrap();
        reactions
            .add(
                Reaction::new(vec![("Water", 1.0).into()], ("Steam", 1.0).into()),
                &substances,
            )
            .unwrap();
        let products: Vec<_> = reactions
            .all()
            .map(|(_, r)| r.product().substance.as_str())
            .collect();
        assert_eq!(products, vec!["Sweat", "Steam"]);
    }
}
