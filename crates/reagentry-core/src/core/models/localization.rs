use crate::core::validation::ValidationError;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Key into a [`Localization`] table (e.g. `REAGENT_SWEAT`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalizationKey(String);

impl LocalizationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocalizationKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for LocalizationKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for LocalizationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocalizationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalizationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Default text plus per-language overrides for a single key.
///
/// The default always exists; it is returned for any language tag without an override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    default: String,
    overrides: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// Adds or replaces the text for `language_tag`. Returns the previous text if any.
    pub fn insert(
        &mut self,
        language_tag: &str,
        text: impl Into<String>,
    ) -> Result<Option<String>, ValidationError> {
        if language_tag.trim().is_empty() {
            return Err(ValidationError::EmptyLanguageTag);
        }
        Ok(self.overrides.insert(language_tag.to_string(), text.into()))
    }

    pub fn get(&self, language_tag: &str) -> &str {
        self.overrides
            .get(language_tag)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }

    pub fn language_tags(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }
}

/// All translation tables registered by extensions, keyed by localization key.
#[derive(Debug, Clone, Default)]
pub struct Localization {
    entries: HashMap<LocalizationKey, TranslationTable>,
}

impl Localization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entry for `key` with `default` text, replacing the default of an existing
    /// entry while keeping its overrides.
    pub fn add_key_entry(
        &mut self,
        key: impl Into<LocalizationKey>,
        default: impl Into<String>,
    ) -> LocalizationKey {
        let key = key.into();
        let default = default.into();
        match self.entries.get_mut(&key) {
            Some(table) => table.default = default,
            None => {
                self.entries
                    .insert(key.clone(), TranslationTable::new(default));
            }
        }
        key
    }

    pub fn add_translation(
        &mut self,
        key: impl AsRef<str>,
        language_tag: &str,
        text: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let key = key.as_ref();
        let table = self
            .entries
            .get_mut(key)
            .ok_or_else(|| ValidationError::UnknownLocalizationKey(key.to_string()))?;
        table.insert(language_tag, text)?;
        Ok(())
    }

    pub fn table(&self, key: impl AsRef<str>) -> Option<&TranslationTable> {
        self.entries.get(key.as_ref())
    }

    /// Text for `key` in `language_tag`, or `None` if the key has no entry.
    pub fn lookup(&self, key: impl AsRef<str>, language_tag: &str) -> Option<&str> {
        self.table(key).map(|table| table.get(language_tag))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweat_localization() -> Localization {
        let mut localization = Localization::new();
        let key = localization.add_key_entry("REAGENT_SWEAT", "Sweat");
        localization.add_translation(&key, "de", "Schweiß").unwrap();
        localization.add_translation(&key, "fr", "Sueur").unwrap();
        localization
    }

    #[test]
    fn lookup_returns_override_for_listed_tag() {
        let localization = sweat_localization();
        assert_eq!(localization.lookup("REAGENT_SWEAT", "de"), Some("Schweiß"));
        assert_eq!(localization.lookup("REAGENT_SWEAT", "fr"), Some("Sueur"));
    }

    #[test]
    fn lookup_falls_back_to_default_for_unlisted_tag() {
        let localization = sweat_localization();
        assert_eq!(localization.lookup("REAGENT_SWEAT", "ja"), Some("Sweat"));
    }

    #[test]
    fn lookup_returns_none_for_unknown_key() {
        let localization = sweat_localization();
        assert_eq!(localization.lookup("REAGENT_TEARS", "de"), None);
    }

    #[test]
    fn add_translation_to_unknown_key_fails() {
        let mut localization = Localization::new();
        let result = localization.add_translation("MISSING", "de", "Fehlt");
        assert_eq!(
            result,
            Err(ValidationError::UnknownLocalizationKey("MISSING".to_string()))
        );
    }

    #[test]
    fn add_translation_with_empty_tag_fails() {
        let mut localization = sweat_localization();
        let result = localization.add_translation("REAGENT_SWEAT", "", "x");
        assert_eq!(result, Err(ValidationError::EmptyLanguageTag));
    }

    #[test]
    fn re_adding_a_tag_overwrites_without_duplicating() {
        let mut localization = sweat_localization();
        localization
            .add_translation("REAGENT_SWEAT", "de", "Schweiss")
            .unwrap();
        let table = localization.table("REAGENT_SWEAT").unwrap();
        assert_eq!(table.get("de"), "Schweiss");
        assert_eq!(table.language_tags().collect::<Vec<_>>(), vec!["de", "fr"]);
    }

    #[test]
    fn add_key_entry_replaces_default_and_keeps_overrides() {
        let mut localization = sweat_localization();
        localization.add_key_entry("REAGENT_SWEAT", "Perspiration");
        assert_eq!(localization.len(), 1);
        assert_eq!(localization.lookup("REAGENT_SWEAT", "ja"), Some("Perspiration"));
        assert_eq!(localization.lookup("REAGENT_SWEAT", "de"), Some("Schweiß"));
    }
}
