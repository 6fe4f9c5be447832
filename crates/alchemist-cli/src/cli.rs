use crate::utils::parser::LigandSelection;
use alchemist::engine::protocol::ProtocolPreset;
use alchemist::core::models::softcore::SasaModel;
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
    author = "Tony Kan, Ted Yu",
    version,
    about = "Alchemist CLI - builds alchemically perturbed force-field systems and lambda protocols for free energy calculations.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the alchemical intermediates of a protocol from a reference system.
    Build(BuildArgs),
    /// Print the states of a protocol preset.
    Protocol(ProtocolArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    // --- Core Arguments ---
    /// Path to the reference system in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub system: PathBuf,

    /// Ligand atom indices, as comma-separated indices and inclusive ranges (e.g., '0-2,5').
    #[arg(short, long, required = true, value_name = "INDICES")]
    pub ligand: LigandSelection,

    /// Directory that receives one system file per state plus the protocol.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,

    #[command(flatten)]
    pub protocol: ProtocolSource,

    /// Path to a factory configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Configuration Overrides ---
    /// Override the softcore `alpha` constant from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub softcore_alpha: Option<f64>,

    /// Override the surface-area model of the softcore generalized Born term.
    #[arg(long, value_enum, value_name = "MODEL")]
    pub sasa_model: Option<SasaModelArg>,

    /// Additional opaque force kind to copy through unmodified. Can be used multiple times.
    #[arg(long = "pass-through", value_name = "KIND")]
    pub pass_through: Vec<String>,
}

/// Where the lambda schedule comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ProtocolSource {
    /// Use a named protocol preset.
    #[arg(short, long, value_name = "PRESET")]
    pub protocol: Option<ProtocolPreset>,

    /// Read a custom protocol from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub protocol_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SasaModelArg {
    Ace,
    None,
}

impl From<SasaModelArg> for SasaModel {
    fn from(arg: SasaModelArg) -> Self {
        match arg {
            SasaModelArg::Ace => SasaModel::Ace,
            SasaModelArg::None => SasaModel::None,
        }
    }
}

/// Arguments for the `protocol` subcommand.
#[derive(Args, Debug)]
pub struct ProtocolArgs {
    /// The preset to print (complex-implicit, complex-explicit, solvent-implicit,
    /// solvent-explicit or vacuum).
    #[arg(required = true, value_name = "PRESET")]
    pub preset: ProtocolPreset,

    /// Print the protocol as a TOML document instead of a table.
    #[arg(long)]
    pub toml: bool,
}
