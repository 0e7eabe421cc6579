//! CLI entry point - the composition root.
//!
//! Logging is initialised here and nowhere else. Handlers write their output
//! to stdout; logs go to stderr.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use opcompat_cli::{Cli, CliConfig, CliError, Commands, handlers};
use opcompat_core::OpNode;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Annotate {
            graph,
            target,
            output,
            pretty,
        } => {
            let config = CliConfig::with_defaults(&graph)
                .with_target(target)
                .with_output(output)
                .with_pretty(pretty);
            handlers::annotate::execute(&config, io::stdin().lock(), &mut out)?;
        }
        Commands::Check {
            name,
            op,
            device,
            target,
        } => {
            let node = OpNode {
                op,
                device,
                ..OpNode::new(name)
            };
            handlers::check::execute(&node, target, &mut out)?;
        }
        Commands::Whitelist => handlers::whitelist::execute(&mut out)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match run(command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!("{err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}
