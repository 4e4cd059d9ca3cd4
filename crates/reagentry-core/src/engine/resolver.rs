use super::config::{MAX_TOLERANCE, ResolverConfig};
use super::events::{EventReporter, ResolutionEvent};
use super::pool::ReagentPool;
use crate::core::models::reaction::{Reaction, ReactionId};
use crate::core::registry::reactions::ReactionRegistry;
use tracing::{debug, instrument, trace};

/// The pool after one resolution pass, and the reactions that fired during it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub pool: ReagentPool,
    pub fired: Vec<ReactionId>,
}

/// Runs single resolution passes over a pool.
///
/// A pass visits reactions in registration order. Each reaction whose reactants are all
/// available fires immediately: its reactants are removed from the pool and its product is
/// added before the next reaction is checked, so two reactions can never spend the same
/// quantity. Products made during a pass are visible to later reactions in that same pass
/// only through the pool, never by re-visiting earlier reactions; chaining requires another
/// call.
#[derive(Debug, Clone, Copy)]
pub struct ReactionResolver<'a> {
    reactions: &'a ReactionRegistry,
    config: ResolverConfig,
}

impl<'a> ReactionResolver<'a> {
    /// Tolerances outside `[0, MAX_TOLERANCE]` are clamped into it.
    pub fn new(reactions: &'a ReactionRegistry, config: ResolverConfig) -> Self {
        let tolerance = if config.tolerance.is_nan() {
            0.0
        } else {
            config.tolerance.clamp(0.0, MAX_TOLERANCE)
        };
        Self {
            reactions,
            config: ResolverConfig { tolerance },
        }
    }

    pub fn is_eligible(&self, reaction: &Reaction, pool: &ReagentPool) -> bool {
        reaction
            .reactants()
            .iter()
            .all(|r| {
                let available = pool.get(&r.substance);
                available > 0.0 && available >= r.quantity * (1.0 - self.config.tolerance)
            })
    }

    /// Pure form: leaves `pool` untouched and returns the outcome.
    pub fn resolve(&self, pool: &ReagentPool) -> Resolution {
        let mut pool = pool.clone();
        let fired = self.resolve_in_place(&mut pool, &EventReporter::new());
        Resolution { pool, fired }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn resolve_in_place(
        &self,
        pool: &mut ReagentPool,
        reporter: &EventReporter,
    ) -> Vec<ReactionId> {
        let mut fired = Vec::new();
        for (id, reaction) in self.reactions.all() {
            if !self.is_eligible(reaction, pool) {
                continue;
            }
            self.apply(reaction, pool);
            trace!("Reaction {} fired: {}", id, reaction);
            reporter.report(ResolutionEvent::ReactionFired {
                id,
                product: reaction.product().substance.clone(),
                produced: reaction.product().quantity,
            });
            fired.push(id);
        }
        debug!(
            "Resolution pass complete: {} of {} reaction(s) fired.",
            fired.len(),
            self.reactions.len()
        );
        fired
    }

    fn apply(&self, reaction: &Reaction, pool: &mut ReagentPool) {
        for reactant in reaction.reactants() {
            pool.take(&reactant.substance, reactant.quantity, self.config.tolerance);
        }
        let product = reaction.product();
        pool.add(&product.substance, product.quantity);
    }
}
