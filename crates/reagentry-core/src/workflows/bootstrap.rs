use crate::core::io::manifest::ContentPack;
use crate::engine::config::EngineConfig;
use crate::engine::context::{EngineBuilder, InstallReport, ReagentEngine};
use crate::engine::error::EngineError;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub struct BootstrapResult {
    pub engine: ReagentEngine,
    pub reports: Vec<InstallReport>,
}

impl BootstrapResult {
    pub fn failure_count(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }
}

/// Loads every pack in `pack_paths`, in order, before installing any of them.
///
/// A pack that cannot be read or parsed aborts the bootstrap; registration failures inside a
/// pack do not.
#[instrument(skip_all, name = "bootstrap_workflow")]
pub fn run(
    builder: EngineBuilder,
    pack_paths: &[PathBuf],
    config: &EngineConfig,
) -> Result<BootstrapResult, EngineError> {
    let packs = pack_paths
        .iter()
        .map(|path| {
            info!("Loading content pack from {:?}", path);
            ContentPack::load(path)
        })
        .collect::<Result<Vec<_>, _>>()?;

    from_packs(builder, &packs, config)
}

/// Installs already-parsed packs in order and freezes the builder.
pub fn from_packs(
    mut builder: EngineBuilder,
    packs: &[ContentPack],
    config: &EngineConfig,
) -> Result<BootstrapResult, EngineError> {
    let reports: Vec<_> = packs.iter().map(|pack| builder.install(pack)).collect();

    let engine = builder.build(config)?;
    let result = BootstrapResult { engine, reports };

    let failures = result.failure_count();
    if failures > 0 {
        warn!(
            "Bootstrap finished with {} dropped registration(s) across {} pack(s).",
            failures,
            packs.len()
        );
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::substance::Substance;
    use std::fs;
    use tempfile::tempdir;

    const BASE_PACK: &str = r#"
        [extension]
        id = "base"

        [[substances]]
        name = "Water"
        cleaning-agent = true

        [[substances]]
        name = "Love"
    "#;

    const SWEAT_PACK: &str = r#"
        [extension]
        id = "com.example.sweat"

        [[substances]]
        name = "Sweat"

        [[reactions]]
        reactants = [{ substance = "Water", quantity = 1.0 }, { substance = "Love", quantity = 0.1 }]
        product = { substance = "Sweat", quantity = 1.0 }
    "#;

    #[test]
    fn run_installs_packs_in_given_order() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("base.toml");
        let sweat = dir.path().join("sweat.toml");
        fs::write(&base, BASE_PACK).unwrap();
        fs::write(&sweat, SWEAT_PACK).unwrap();

        let result = run(
            EngineBuilder::new(),
            &[base, sweat],
            &EngineConfig::new("0.9.2"),
        )
        .unwrap();

        assert_eq!(result.failure_count(), 0);
        assert_eq!(result.engine.reactions().len(), 1);
        assert_eq!(
            result.engine.fingerprint().as_str(),
            "0.9.2+base+com.example.sweat"
        );
    }

    #[test]
    fn reaction_before_its_substances_is_dropped() {
        let packs = [
            ContentPack::from_toml_str(SWEAT_PACK).unwrap(),
            ContentPack::from_toml_str(BASE_PACK).unwrap(),
        ];

        let result = from_packs(EngineBuilder::new(), &packs, &EngineConfig::new("1.0")).unwrap();

        assert_eq!(result.failure_count(), 1);
        assert!(result.engine.reactions().is_empty());
        assert_eq!(result.engine.substances().len(), 3);
    }

    #[test]
    fn code_registered_content_is_kept() {
        let mut builder = EngineBuilder::new();
        builder.register_substance(Substance::new("Water")).unwrap();
        builder.register_substance(Substance::new("Love")).unwrap();
        let packs = [ContentPack::from_toml_str(SWEAT_PACK).unwrap()];

        let result = from_packs(builder, &packs, &EngineConfig::new("1.0")).unwrap();

        assert_eq!(result.failure_count(), 0);
        assert_eq!(result.engine.reactions().len(), 1);
    }

    #[test]
    fn run_fails_for_missing_pack() {
        let dir = tempdir().unwrap();
        let result = run(
            EngineBuilder::new(),
            &[dir.path().join("missing.toml")],
            &EngineConfig::new("1.0"),
        );
        assert!(matches!(result, Err(EngineError::Manifest(_))));
    }
}
