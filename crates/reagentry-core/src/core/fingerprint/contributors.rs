use crate::core::validation::{FINGERPRINT_SEPARATOR, ValidationError, validate_identifier};
use std::collections::BTreeSet;
use std::fmt;

/// Identifiers of every extension that contributed content, kept in canonical (sorted) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorSet {
    identifiers: BTreeSet<String>,
}

impl ContributorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `identifier`. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, identifier: &str) -> Result<bool, ValidationError> {
        validate_identifier(identifier)?;
        Ok(self.identifiers.insert(identifier.to_string()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether a peer advertising `other` runs the same content set.
    pub fn is_compatible_with(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Folds the contributor set into `base_version`.
///
/// An empty set leaves the base version untouched, so unmodified installations keep matching
/// each other.
pub fn compute_fingerprint(base_version: &str, contributors: &ContributorSet) -> Fingerprint {
    let mut token = String::from(base_version);
    for identifier in contributors.iter() {
        token.push(FINGERPRINT_SEPARATOR);
        token.push_str(identifier);
    }
    Fingerprint(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(ids: &[&str]) -> ContributorSet {
        let mut set = ContributorSet::new();
        for id in ids {
            set.insert(id).unwrap();
        }
        set
    }

    #[test]
    fn fingerprint_is_independent_of_insertion_order() {
        let a = compute_fingerprint("0.9.2", &set_of(&["A", "B"]));
        let b = compute_fingerprint("0.9.2", &set_of(&["B", "A"]));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "0.9.2+A+B");
    }

    #[test]
    fn fingerprint_differs_for_different_sets() {
        let a = compute_fingerprint("0.9.2", &set_of(&["A"]));
        let ab = compute_fingerprint("0.9.2", &set_of(&["A", "B"]));
        assert_ne!(a, ab);
    }

    #[test]
    fn fingerprint_differs_for_different_base_versions() {
        let set = set_of(&["A"]);
        assert_ne!(
            compute_fingerprint("0.9.2", &set),
            compute_fingerprint("0.9.3", &set)
        );
    }

    #[test]
    fn empty_set_yields_base_version() {
        let fp = compute_fingerprint("0.9.2", &ContributorSet::new());
        assert_eq!(fp.as_str(), "0.9.2");
        assert!(fp.is_compatible_with("0.9.2"));
    }

    #[test]
    fn duplicate_identifiers_are_deduplicated() {
        let mut set = ContributorSet::new();
        assert_eq!(set.insert("com.example.sweat"), Ok(true));
        assert_eq!(set.insert("com.example.sweat"), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(
            compute_fingerprint("1.0", &set).as_str(),
            "1.0+com.example.sweat"
        );
    }

    #[test]
    fn identifier_with_separator_is_rejected() {
        let mut set = ContributorSet::new();
        let result = set.insert("com.example+evil");
        assert!(matches!(
            result,
            Err(ValidationError::IllegalCharacter { character: '+', .. })
        ));
        assert!(set.is_empty());
    }

    #[test]
    fn sorting_prevents_ambiguous_concatenation() {
        let joined = compute_fingerprint("1", &set_of(&["ab", "c"]));
        let split = compute_fingerprint("1", &set_of(&["a", "bc"]));
        assert_ne!(joined, split);
    }
}
