use super::config::EngineConfig;
use super::error::EngineError;
use super::events::EventReporter;
use super::pool::ReagentPool;
use super::resolver::{ReactionResolver, Resolution};
use crate::core::fingerprint::{ContentDigest, ContributorSet, Fingerprint, compute_fingerprint};
use crate::core::io::manifest::ContentPack;
use crate::core::models::consumption::{ConsumptionBehavior, ConsumptionHandler};
use crate::core::models::localization::{Localization, LocalizationKey};
use crate::core::models::reaction::{Reaction, ReactionId, ReagentAmount};
use crate::core::models::substance::Substance;
use crate::core::registry::reactions::{ReactionError, ReactionRegistry};
use crate::core::registry::substances::SubstanceRegistry;
use crate::core::validation::{ValidationError, validate_identifier};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DIGEST_CONTRIBUTOR_PREFIX: &str = "content-";

/// A registration that was dropped while installing a content pack.
#[derive(Debug)]
pub struct InstallFailure {
    pub item: String,
    pub error: EngineError,
}

#[derive(Debug, Default)]
pub struct InstallReport {
    pub extension_id: String,
    pub translations: usize,
    pub substances: usize,
    pub reactions: usize,
    pub failures: Vec<InstallFailure>,
}

impl InstallReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Registration context handed to every extension during start-up.
///
/// All registration goes through `&mut self`; once every extension has run, [`Self::build`]
/// freezes the content into a [`ReagentEngine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    substances: SubstanceRegistry,
    reactions: ReactionRegistry,
    localization: Localization,
    contributors: ContributorSet,
    handlers: HashMap<String, Arc<dyn ConsumptionHandler>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a substance. Later registrations under the same name win.
    pub fn register_substance(&mut self, substance: Substance) -> Result<(), ValidationError> {
        let name = substance.name().to_string();
        if self.substances.upsert(substance)?.is_some() {
            debug!("Substance '{}' overridden by a later registration.", name);
        }
        Ok(())
    }

    pub fn register_reaction(
        &mut self,
        reactants: Vec<ReagentAmount>,
        product: ReagentAmount,
    ) -> Result<ReactionId, ReactionError> {
        self.add_reaction(Reaction::new(reactants, product))
    }

    pub fn add_reaction(&mut self, reaction: Reaction) -> Result<ReactionId, ReactionError> {
        self.reactions.add(reaction, &self.substances)
    }

    pub fn add_key_entry(
        &mut self,
        key: impl Into<LocalizationKey>,
        default: impl Into<String>,
    ) -> LocalizationKey {
        self.localization.add_key_entry(key, default)
    }

    pub fn add_translation(
        &mut self,
        key: impl AsRef<str>,
        language_tag: &str,
        text: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.localization.add_translation(key, language_tag, text)
    }

    /// Records the identifier of an extension that contributes content. Returns `Ok(false)` if
    /// it was already registered.
    pub fn register_contributor(&mut self, identifier: &str) -> Result<bool, ValidationError> {
        self.contributors.insert(identifier)
    }

    /// Makes a custom consumption behavior available to content packs under its name.
    pub fn register_consumption_handler(&mut self, handler: Arc<dyn ConsumptionHandler>) {
        let name = handler.name().to_string();
        if self.handlers.insert(name.clone(), handler).is_some() {
            debug!("Consumption handler '{}' replaced.", name);
        }
    }

    pub fn consumption_handler(&self, name: &str) -> Option<ConsumptionBehavior> {
        self.handlers
            .get(name)
            .map(|handler| ConsumptionBehavior::Custom(Arc::clone(handler)))
    }

    /// Installs every item of `pack`: localization, then substances, then reactions, then the
    /// extension's contributor identifier.
    ///
    /// Individual failures are logged and collected in the report; the remaining items are
    /// still installed. A pack whose identifier is invalid is skipped entirely, since its
    /// content could not be reflected in the fingerprint.
    pub fn install(&mut self, pack: &ContentPack) -> InstallReport {
        let id = pack.extension.id.as_str();
        let mut report = InstallReport {
            extension_id: id.to_string(),
            ..Default::default()
        };

        if let Err(e) = validate_identifier(id) {
            warn!("Skipping content pack with invalid identifier '{}': {}", id, e);
            report.failures.push(InstallFailure {
                item: format!("extension '{id}'"),
                error: e.into(),
            });
            return report;
        }

        for entry in &pack.localization {
            let key = self.add_key_entry(entry.key.as_str(), entry.default.clone());
            report.translations += 1;
            for (tag, text) in &entry.translations {
                if let Err(e) = self.add_translation(&key, tag, text.clone()) {
                    warn!("[{}] Dropped translation '{}' for '{}': {}", id, tag, key, e);
                    report.failures.push(InstallFailure {
                        item: format!("translation '{key}' ({tag})"),
                        error: e.into(),
                    });
                }
            }
        }

        for entry in &pack.substances {
            let result = entry
                .to_substance(|name| self.consumption_handler(name))
                .and_then(|substance| self.register_substance(substance));
            match result {
                Ok(()) => report.substances += 1,
                Err(e) => {
                    warn!("[{}] Dropped substance '{}': {}", id, entry.name, e);
                    report.failures.push(InstallFailure {
                        item: format!("substance '{}'", entry.name),
                        error: e.into(),
                    });
                }
            }
        }

        for entry in &pack.reactions {
            let reaction = Reaction::from(entry);
            match self.add_reaction(reaction.clone()) {
                Ok(_) => report.reactions += 1,
                Err(e) => {
                    warn!("[{}] Dropped reaction '{}': {}", id, reaction, e);
                    report.failures.push(InstallFailure {
                        item: format!("reaction '{reaction}'"),
                        error: e.into(),
                    });
                }
            }
        }

        if let Err(e) = self.register_contributor(id) {
            report.failures.push(InstallFailure {
                item: format!("extension '{id}'"),
                error: e.into(),
            });
        }

        info!(
            "Installed content pack '{}': {} substance(s), {} reaction(s), {} localization entr(ies), {} failure(s).",
            id,
            report.substances,
            report.reactions,
            report.translations,
            report.failures.len()
        );
        report
    }

    pub fn substances(&self) -> &SubstanceRegistry {
        &self.substances
    }

    pub fn reactions(&self) -> &ReactionRegistry {
        &self.reactions
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    pub fn contributors(&self) -> &ContributorSet {
        &self.contributors
    }

    /// Freezes the registered content and computes the compatibility fingerprint.
    pub fn build(self, config: &EngineConfig) -> Result<ReagentEngine, EngineError> {
        let digest = ContentDigest::of(&self.substances, &self.reactions);
        let mut contributors = self.contributors;
        if config.include_content_digest {
            contributors.insert(&format!("{DIGEST_CONTRIBUTOR_PREFIX}{}", digest.short()))?;
        }
        let fingerprint = compute_fingerprint(&config.base_version, &contributors);

        info!(
            "Engine frozen with {} substance(s), {} reaction(s) from {} contributor(s). Fingerprint: {}",
            self.substances.len(),
            self.reactions.len(),
            contributors.len(),
            fingerprint
        );

        Ok(ReagentEngine {
            inner: Arc::new(FrozenContent {
                substances: self.substances,
                reactions: self.reactions,
                localization: self.localization,
                contributors,
                fingerprint,
                digest,
                config: config.clone(),
            }),
        })
    }
}

#[derive(Debug)]
struct FrozenContent {
    substances: SubstanceRegistry,
    reactions: ReactionRegistry,
    localization: Localization,
    contributors: ContributorSet,
    fingerprint: Fingerprint,
    digest: ContentDigest,
    config: EngineConfig,
}

/// Immutable snapshot of all registered content. Cloning shares the snapshot.
#[derive(Debug, Clone)]
pub struct ReagentEngine {
    inner: Arc<FrozenContent>,
}

impl ReagentEngine {
    pub fn substance(&self, name: &str) -> Option<&Substance> {
        self.inner.substances.get(name)
    }

    pub fn substances(&self) -> &SubstanceRegistry {
        &self.inner.substances
    }

    pub fn reaction(&self, id: ReactionId) -> Option<&Reaction> {
        self.inner.reactions.get(id)
    }

    pub fn reactions(&self) -> &ReactionRegistry {
        &self.inner.reactions
    }

    pub fn localization(&self) -> &Localization {
        &self.inner.localization
    }

    pub fn contributors(&self) -> &ContributorSet {
        &self.inner.contributors
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.inner.fingerprint
    }

    pub fn content_digest(&self) -> &ContentDigest {
        &self.inner.digest
    }

    pub fn config(&self) -> &EngineConfig {
        &self.inner.config
    }

    /// Whether a peer advertising `peer_fingerprint` may join a session with this process.
    pub fn is_compatible_with(&self, peer_fingerprint: &str) -> bool {
        self.inner.fingerprint.is_compatible_with(peer_fingerprint)
    }

    /// Localized name of `substance` in `language_tag`.
    pub fn display_text(&self, substance: &str, language_tag: &str) -> Option<&str> {
        self.substance(substance)
            .map(|s| s.display_text(&self.inner.localization, language_tag))
    }

    pub fn resolver(&self) -> ReactionResolver<'_> {
        ReactionResolver::new(&self.inner.reactions, self.inner.config.resolver)
    }

    pub fn resolve(&self, pool: &ReagentPool) -> Resolution {
        self.resolver().resolve(pool)
    }

    pub fn resolve_in_place(
        &self,
        pool: &mut ReagentPool,
        reporter: &EventReporter,
    ) -> Vec<ReactionId> {
        self.resolver().resolve_in_place(pool, reporter)
    }
}
