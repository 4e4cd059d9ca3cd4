use crate::core::models::reaction::ReactionId;
use crate::engine::context::ReagentEngine;
use crate::engine::events::{EventReporter, ResolutionEvent};
use crate::engine::pool::ReagentPool;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub pool: ReagentPool,
    /// Reactions fired in each pass that fired anything.
    pub passes: Vec<Vec<ReactionId>>,
    /// True if the last pass fired nothing, i.e. the pool is stable.
    pub settled: bool,
}

/// Resolves `pool` repeatedly, at most `max_passes` times, stopping at the first pass in
/// which nothing fires.
#[instrument(skip_all, name = "simulate_workflow", fields(max_passes = max_passes))]
pub fn run(
    engine: &ReagentEngine,
    pool: &ReagentPool,
    max_passes: usize,
    reporter: &EventReporter,
) -> SimulationResult {
    let resolver = engine.resolver();
    let mut pool = pool.clone();
    let mut passes = Vec::new();
    let mut settled = false;

    for pass in 0..max_passes {
        reporter.report(ResolutionEvent::PassStart { pass });
        let fired = resolver.resolve_in_place(&mut pool, reporter);
        reporter.report(ResolutionEvent::PassFinish { fired: fired.len() });
        if fired.is_empty() {
            settled = true;
            break;
        }
        passes.push(fired);
    }

    debug!(
        "Simulation ran {} productive pass(es); settled: {}",
        passes.len(),
        settled
    );
    SimulationResult {
        pool,
        passes,
        settled,
    }
}
