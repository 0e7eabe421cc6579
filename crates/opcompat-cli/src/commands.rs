//! Subcommands of the `opcompat` tool.

use std::path::PathBuf;

use clap::Subcommand;
use opcompat_core::CompatibilityTarget;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate every node of a graph with its target compatibility
    Annotate {
        /// Graph JSON file, or `-` to read from stdin
        graph: String,

        /// Execution target to check against (tpu, none)
        #[arg(short, long, env = "OPCOMPAT_TARGET", default_value = "tpu")]
        target: CompatibilityTarget,

        /// Write the annotated graph here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check a single op node
    Check {
        /// Node name
        #[arg(long)]
        name: String,

        /// Op-type identifier
        #[arg(long)]
        op: Option<String>,

        /// Device placement string
        #[arg(long)]
        device: Option<String>,

        /// Execution target to check against (tpu, none)
        #[arg(short, long, env = "OPCOMPAT_TARGET", default_value = "tpu")]
        target: CompatibilityTarget,
    },

    /// Print the ops whitelisted for the TPU
    Whitelist,
}
