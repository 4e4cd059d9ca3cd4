use crate::cli::PackArgs;
use crate::error::{CliError, Result};
use reagentry::engine::config::{DEFAULT_TOLERANCE, EngineConfig, EngineConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct DefaultsConfig {
    pub base_version: String,
    pub tolerance: f64,
    pub max_passes: usize,
    pub include_content_digest: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_version: "0.0.0".to_string(),
            tolerance: DEFAULT_TOLERANCE,
            max_passes: 1,
            include_content_digest: false,
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileResolverConfig {
    tolerance: Option<f64>,
    max_passes: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileConfig {
    base_version: Option<String>,
    #[serde(default)]
    packs: Vec<PathBuf>,
    include_content_digest: Option<bool>,
    resolver: Option<FileResolverConfig>,
}

impl FileConfig {
    fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        if let Some(dir) = path.parent() {
            config.packs = config
                .packs
                .into_iter()
                .map(|p| if p.is_relative() { dir.join(p) } else { p })
                .collect();
        }
        Ok(config)
    }
}

/// Settings from the config file layered over built-in defaults. Command-line arguments are
/// applied on top by [`AppConfig::engine_config`] and friends.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_version: String,
    pub packs: Vec<PathBuf>,
    pub include_content_digest: bool,
    pub tolerance: f64,
    pub max_passes: usize,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(file, DefaultsConfig::default()))
    }

    fn merge(file: FileConfig, defaults: DefaultsConfig) -> Self {
        let resolver = file.resolver.unwrap_or_default();
        Self {
            base_version: file.base_version.unwrap_or(defaults.base_version),
            packs: file.packs,
            include_content_digest: file
                .include_content_digest
                .unwrap_or(defaults.include_content_digest),
            tolerance: resolver.tolerance.unwrap_or(defaults.tolerance),
            max_passes: resolver.max_passes.unwrap_or(defaults.max_passes),
        }
    }

    /// Config-file packs first, then packs given on the command line.
    pub fn pack_paths(&self, args: &PackArgs) -> Result<Vec<PathBuf>> {
        let paths: Vec<PathBuf> = self
            .packs
            .iter()
            .chain(args.packs.iter())
            .cloned()
            .collect();
        if paths.is_empty() {
            return Err(CliError::Argument(
                "no content packs given (pass them as arguments or list them under 'packs' in the config file)"
                    .to_string(),
            ));
        }
        Ok(paths)
    }

    pub fn engine_config(&self, args: &PackArgs, tolerance: Option<f64>) -> Result<EngineConfig> {
        EngineConfigBuilder::new()
            .base_version(
                args.base_version
                    .clone()
                    .unwrap_or_else(|| self.base_version.clone()),
            )
            .tolerance(tolerance.unwrap_or(self.tolerance))
            .include_content_digest(args.with_digest || self.include_content_digest)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_without_file_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.base_version, "0.0.0");
        assert_eq!(config.max_passes, 1);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert!(config.packs.is_empty());
    }

    #[test]
    fn load_reads_file_and_resolves_relative_packs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reagentry.toml");
        fs::write(
            &path,
            r#"
            base-version = "0.9.2"
            packs = ["packs/base.toml", "/abs/sweat.toml"]
            include-content-digest = true

            [resolver]
            tolerance = 0.0001
            max-passes = 8
            "#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.base_version, "0.9.2");
        assert_eq!(
            config.packs,
            vec![dir.path().join("packs/base.toml"), PathBuf::from("/abs/sweat.toml")]
        );
        assert!(config.include_content_digest);
        assert_eq!(config.tolerance, 0.0001);
        assert_eq!(config.max_passes, 8);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reagentry.toml");
        fs::write(&path, "base-version = \"1\"\nrandom-key = 3").unwrap();
        let result = AppConfig::load(Some(&path));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let config = AppConfig {
            base_version: "0.9.2".to_string(),
            packs: vec![],
            include_content_digest: false,
            tolerance: 1e-6,
            max_passes: 1,
        };
        let args = PackArgs {
            packs: vec![],
            base_version: Some("1.0.0".to_string()),
            with_digest: true,
        };

        let engine_config = config.engine_config(&args, Some(1e-4)).unwrap();

        assert_eq!(engine_config.base_version, "1.0.0");
        assert_eq!(engine_config.resolver.tolerance, 1e-4);
        assert!(engine_config.include_content_digest);
    }

    #[test]
    fn pack_paths_puts_config_packs_first_and_requires_one() {
        let config = AppConfig {
            packs: vec![PathBuf::from("base.toml")],
            ..AppConfig::load(None).unwrap()
        };
        let args = PackArgs {
            packs: vec![PathBuf::from("sweat.toml")],
            ..Default::default()
        };
        assert_eq!(
            config.pack_paths(&args).unwrap(),
            vec![PathBuf::from("base.toml"), PathBuf::from("sweat.toml")]
        );

        let empty = AppConfig::load(None).unwrap();
        assert!(matches!(
            empty.pack_paths(&PackArgs::default()),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn invalid_tolerance_is_a_config_error() {
        let config = AppConfig::load(None).unwrap();
        for tolerance in [-1.0, 0.5] {
            let result = config.engine_config(&PackArgs::default(), Some(tolerance));
            assert!(matches!(result, Err(CliError::Config(_))));
        }
    }

    #[test]
    fn base_version_with_separator_is_a_config_error() {
        let config = AppConfig::load(None).unwrap();
        let args = PackArgs {
            base_version: Some("1.0+A".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.engine_config(&args, None),
            Err(CliError::Config(_))
        ));
    }
}
