//! Resolved configuration for an annotate run.

use std::fmt;
use std::path::PathBuf;

use opcompat_core::CompatibilityTarget;

/// Where the input graph comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    Stdin,
    File(PathBuf),
}

impl GraphSource {
    /// `-` means stdin; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for GraphSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration for the annotate command.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Input graph.
    pub source: GraphSource,
    /// Execution target to judge nodes against.
    pub target: CompatibilityTarget,
    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Pretty-print the output JSON.
    pub pretty: bool,
}

impl CliConfig {
    /// Config reading `graph` and checking it against the default target.
    pub fn with_defaults(graph: &str) -> Self {
        Self {
            source: GraphSource::from_arg(graph),
            target: CompatibilityTarget::default(),
            output: None,
            pretty: false,
        }
    }

    #[must_use]
    pub const fn with_target(mut self, target: CompatibilityTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
