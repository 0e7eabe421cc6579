//! Annotate command handler.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};

use opcompat_core::{CompatibilitySummary, SlimGraph, check_ops_for_compatibility, summarize};
use tracing::{info, warn};

use crate::config::{CliConfig, GraphSource};
use crate::error::CliError;

/// Execute the annotate command.
///
/// Reads the graph named by `config.source` (with `stdin` standing in for
/// `-`), annotates it and writes the JSON to `config.output` or `out`.
pub fn execute(
    config: &CliConfig,
    stdin: impl Read,
    out: &mut impl Write,
) -> Result<CompatibilitySummary, CliError> {
    let mut graph = load_graph(&config.source, stdin)?;

    let provider = config.target.provider();
    check_ops_for_compatibility(&mut graph, Some(provider.as_ref()))?;

    let summary = summarize(&graph);
    if !summary.is_fully_annotated() {
        return Err(CliError::Core(format!(
            "{} node(s) left unannotated",
            summary.unannotated
        )));
    }

    match &config.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_graph(&graph, config.pretty, &mut writer)?;
            writer.flush()?;
        }
        None => write_graph(&graph, config.pretty, out)?,
    }

    info!(
        source = %config.source,
        target = %config.target,
        total = summary.total(),
        compatible = summary.compatible,
        incompatible = summary.incompatible,
        "annotated graph"
    );
    for name in &summary.incompatible_nodes {
        warn!(node = %name, target = %config.target, "op is not compatible");
    }

    Ok(summary)
}

fn load_graph(source: &GraphSource, stdin: impl Read) -> Result<SlimGraph, CliError> {
    match source {
        GraphSource::Stdin => Ok(serde_json::from_reader(BufReader::new(stdin))?),
        GraphSource::File(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

fn write_graph(graph: &SlimGraph, pretty: bool, out: &mut impl Write) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, graph)?;
    } else {
        serde_json::to_writer(&mut *out, graph)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opcompat_core::CompatibilityTarget;

    const GRAPH: &str = r#"{"nodes":[
        {"name":"mul","op":"Multiply_52","device":"/device:TPU:0"},
        {"name":"odd","op":"UnknownOp","device":"/device:TPU:0"}
    ]}"#;

    fn run(config: &CliConfig) -> (Result<CompatibilitySummary, CliError>, String) {
        let mut out = Vec::<u8>::new();
        let result = execute(config, GRAPH.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_annotates_stdin_to_writer() {
        let (result, out) = run(&CliConfig::with_defaults("-"));

        let summary = result.unwrap();
        assert_eq!(summary.compatible, 1);
        assert_eq!(summary.incompatible_nodes, ["odd"]);

        let graph: SlimGraph = serde_json::from_str(&out).unwrap();
        assert_eq!(graph.nodes[0].compatible, Some(true));
        assert_eq!(graph.nodes[1].compatible, Some(false));
    }

    #[test]
    fn test_permissive_target() {
        let config = CliConfig::with_defaults("-").with_target(CompatibilityTarget::None);
        let (result, _) = run(&config);
        assert_eq!(result.unwrap().incompatible, 0);
    }

    #[test]
    fn test_pretty_output_spans_lines() {
        let (_, compact) = run(&CliConfig::with_defaults("-"));
        let (_, pretty) = run(&CliConfig::with_defaults("-").with_pretty(true));
        assert_eq!(compact.lines().count(), 1);
        assert!(pretty.lines().count() > 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut out = Vec::<u8>::new();
        let err = execute(&CliConfig::with_defaults("-"), "[1, 2".as_bytes(), &mut out)
            .unwrap_err();
        assert!(matches!(err, CliError::Parse(_) | CliError::Io(_)));
        assert!(out.is_empty());
    }
}
