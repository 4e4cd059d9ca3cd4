pub mod check;
pub mod fingerprint;
pub mod resolve;

use crate::cli::PackArgs;
use crate::config::AppConfig;
use crate::error::Result;
use reagentry::engine::config::EngineConfig;
use reagentry::engine::context::EngineBuilder;
use reagentry::workflows::{self, bootstrap::BootstrapResult};
use tracing::info;

/// Installs every configured pack into a fresh engine.
pub(crate) fn bootstrap(
    args: &PackArgs,
    app_config: &AppConfig,
    engine_config: &EngineConfig,
) -> Result<BootstrapResult> {
    let paths = app_config.pack_paths(args)?;
    info!("Bootstrapping engine from {} content pack(s).", paths.len());
    Ok(workflows::bootstrap::run(
        EngineBuilder::new(),
        &paths,
        engine_config,
    )?)
}
