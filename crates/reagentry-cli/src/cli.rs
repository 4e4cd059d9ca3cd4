use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Reagentry CLI - inspect content packs, compute compatibility fingerprints and run reaction resolution.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install content packs in order and report what was registered or dropped.
    Check(PackArgs),
    /// Print the compatibility string for a set of content packs.
    Fingerprint(PackArgs),
    /// Run reaction resolution over a pool of substances.
    Resolve(ResolveArgs),
}

/// Content packs and fingerprint options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PackArgs {
    /// Content pack manifests, installed in the order given (after any listed in the config file).
    #[arg(value_name = "PACK")]
    pub packs: Vec<PathBuf>,

    /// Override the base version the fingerprint is appended to.
    #[arg(long, value_name = "VERSION")]
    pub base_version: Option<String>,

    /// Fold a digest of the installed content into the fingerprint.
    #[arg(long)]
    pub with_digest: bool,
}

/// Arguments for the `resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub packs: PackArgs,

    /// Initial pool entry; can be used multiple times. Example: --pool Water=1.0
    #[arg(short, long = "pool", value_name = "NAME=QTY", required = true)]
    pub pool: Vec<String>,

    /// Maximum number of resolution passes (1 means no chaining).
    #[arg(short = 'n', long, value_name = "INT")]
    pub passes: Option<usize>,

    /// Override the relative quantity comparison tolerance (must be below 0.001).
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,
}
