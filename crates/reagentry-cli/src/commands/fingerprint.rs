use super::bootstrap;
use crate::cli::PackArgs;
use crate::config::AppConfig;
use crate::error::Result;
use tracing::debug;

pub fn run(args: PackArgs, app_config: &AppConfig) -> Result<()> {
    let engine_config = app_config.engine_config(&args, None)?;
    let result = bootstrap(&args, app_config, &engine_config)?;

    let engine = &result.engine;
    debug!("Content digest: {}", engine.content_digest());
    println!("{}", engine.fingerprint());

    Ok(())
}
