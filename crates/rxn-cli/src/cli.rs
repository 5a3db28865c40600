use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rxn-rebuild - Rebuild full reactions from reaction rules by restoring the compounds the rule left out of its template reaction.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Complete a transformation with the compounds a reaction rule dropped from its template reaction(s).
    Complete(CompleteArgs),
    /// Manage the location of the local compound cache.
    Cache(CacheArgs),
}

/// How completed transformations are reported on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per template reaction, in the notation of the input.
    #[default]
    Text,
    /// The full result mapping, keyed by template reaction ID.
    Json,
}

/// Arguments for the `complete` subcommand.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Reaction rule identifier (e.g., RR-02-f85f00f767901186-16-F).
    #[arg(value_name = "RULE_ID")]
    pub rule_id: String,

    /// Transformation to complete, as SMILES ("CCO>>CC=O") or compound IDs ("MNXM179=MNXM22+MNXM23").
    #[arg(value_name = "TRANSFORMATION", allow_hyphen_values = true)]
    pub transformation: String,

    /// Only complete against this template (original) reaction.
    #[arg(short = 't', long, value_name = "ID")]
    pub template_id: Option<String>,

    /// Orientation of the transformation relative to the rule: 'forward' or 'reverse'.
    #[arg(short, long, value_name = "DIRECTION")]
    pub direction: Option<String>,

    /// Compound ID never to add. Can be used multiple times or comma-separated.
    #[arg(short, long = "ignore", value_name = "CID", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Detect missing compounds by diffing rule and template instead of reading exclusion lists.
    #[arg(long)]
    pub legacy: bool,

    /// Drop completed transformations whose sides disagree with the template.
    #[arg(long)]
    pub strict: bool,

    /// Do not complete a transformation when a compound to add has no known structure.
    #[arg(long)]
    pub no_structureless: bool,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the compound cache JSON files, overriding the configured location.
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S completion.direction=forward
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `cache` subcommand.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Available commands for cache location management.
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show the absolute path to the compound cache directory and which files it holds.
    Path,
    /// Set a custom absolute path for the compound cache directory.
    SetPath {
        /// The directory holding rr_reactions.json, template_reactions.json and cid_strc.json.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the cache path to its default, OS-specific location.
    ResetPath,
}
