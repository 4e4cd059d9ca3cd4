use super::bootstrap;
use crate::cli::ResolveArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::parser;
use reagentry::engine::events::{EventReporter, ResolutionEvent};
use reagentry::workflows;
use tracing::{debug, info, warn};

pub fn run(args: ResolveArgs, app_config: &AppConfig) -> Result<()> {
    let max_passes = args.passes.unwrap_or(app_config.max_passes);
    if max_passes == 0 {
        return Err(CliError::Argument(
            "the number of passes must be at least 1".to_string(),
        ));
    }

    let pool = parser::parse_pool(&args.pool)?;
    let engine_config = app_config.engine_config(&args.packs, args.tolerance)?;
    let result = bootstrap(&args.packs, app_config, &engine_config)?;
    let engine = &result.engine;

    if result.failure_count() > 0 {
        warn!(
            "{} registration(s) were dropped while installing packs; run 'check' for details.",
            result.failure_count()
        );
    }

    let reporter = EventReporter::with_callback(Box::new(|event: ResolutionEvent| {
        debug!("{:?}", event);
    }));

    println!("Initial pool: {}", pool);
    info!("Running up to {} resolution pass(es).", max_passes);
    let simulation = workflows::simulate::run(engine, &pool, max_passes, &reporter);

    if simulation.passes.is_empty() {
        println!("No reactions fired.");
    }
    for (i, fired) in simulation.passes.iter().enumerate() {
        println!("Pass {}:", i + 1);
        for id in fired {
            if let Some(reaction) = engine.reaction(*id) {
                println!("  {} {}", id, reaction);
            }
        }
    }

    println!("Final pool: {}", simulation.pool);
    if !simulation.settled && max_passes > 1 {
        println!("Pass limit reached before the pool settled.");
    }

    Ok(())
}
