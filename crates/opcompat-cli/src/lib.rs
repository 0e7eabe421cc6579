//! Command-line adapter for `opcompat-core`.
//!
//! Loads a slim graph from JSON, runs the compatibility pass with the
//! configured target and writes the annotated graph back out.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use anyhow as _;
use tracing_subscriber as _;

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use config::{CliConfig, GraphSource};
pub use error::CliError;
pub use parser::Cli;
