//! Integration tests for the annotate handler against files on disk.

use std::fs;
use std::io;

use opcompat_cli::{CliConfig, CliError, handlers};
use opcompat_core::{CompatibilityTarget, SlimGraph};
use tempfile::tempdir;

const GRAPH: &str = r#"{
  "nodes": [
    {
      "name": "mul",
      "op": "Multiply_52",
      "device": "/job:tpu_worker/device:TPU:0",
      "inEmbeddings": [{ "name": "mul/y", "op": "Const" }]
    },
    { "name": "infeed", "op": "InfeedDequeue", "device": "/job:tpu_worker/device:TPU_SYSTEM:0" },
    { "name": "cast", "op": "Cast", "device": "/job:worker/device:CPU:0" }
  ]
}"#;

#[test]
fn test_annotates_file_into_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("graph.json");
    let output = dir.path().join("annotated.json");
    fs::write(&input, GRAPH).unwrap();

    let config = CliConfig::with_defaults(input.to_str().unwrap())
        .with_output(Some(output.clone()))
        .with_pretty(true);
    let mut stdout = Vec::<u8>::new();
    let summary = handlers::annotate::execute(&config, io::empty(), &mut stdout).unwrap();

    assert!(stdout.is_empty());
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.incompatible_nodes, ["mul/y"]);

    let graph: SlimGraph = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(graph.nodes[0].compatible, Some(true));
    assert_eq!(graph.nodes[0].in_embeddings[0].compatible, Some(false));
    assert_eq!(graph.nodes[1].compatible, Some(true));
    assert_eq!(graph.nodes[2].compatible, Some(true));
}

#[test]
fn test_permissive_target_marks_everything_compatible() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("graph.json");
    fs::write(&input, GRAPH).unwrap();

    let config = CliConfig::with_defaults(input.to_str().unwrap())
        .with_target(CompatibilityTarget::None);
    let mut stdout = Vec::<u8>::new();
    let summary = handlers::annotate::execute(&config, io::empty(), &mut stdout).unwrap();

    assert_eq!(summary.compatible, 4);
    assert_eq!(summary.incompatible, 0);
}

#[test]
fn test_missing_input_file_is_io_error() {
    let dir = tempdir().unwrap();
    let config = CliConfig::with_defaults(dir.path().join("absent.json").to_str().unwrap());

    let err = handlers::annotate::execute(&config, io::empty(), &mut Vec::<u8>::new()).unwrap_err();

    assert!(matches!(err, CliError::Io(_)));
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_malformed_graph_is_parse_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("graph.json");
    fs::write(&input, r#"{"nodes": "not a list"}"#).unwrap();

    let config = CliConfig::with_defaults(input.to_str().unwrap());
    let err = handlers::annotate::execute(&config, io::empty(), &mut Vec::<u8>::new()).unwrap_err();

    assert!(matches!(err, CliError::Parse(_)));
}
