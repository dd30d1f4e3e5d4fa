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
    about = "Bondlab CLI - a headless driver for the bondlab 2D covalent bonding sandbox engine.",
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
    /// Run a command script against a fresh simulation session.
    Run(RunArgs),
    /// Print the built-in element palette.
    Elements,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the command script to execute.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Path to a TOML file overriding engine tunables.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated frame rate used to size each step's time slice.
    #[arg(long, value_name = "HZ", default_value_t = 60.0)]
    pub fps: f64,
}
