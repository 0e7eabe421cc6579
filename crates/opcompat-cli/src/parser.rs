//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Annotate op graphs with execution-target compatibility.
#[derive(Debug, Parser)]
#[command(name = "opcompat")]
#[command(about = "Mark op graph nodes as compatible with an execution target")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
