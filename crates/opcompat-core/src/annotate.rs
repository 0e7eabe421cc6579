//! The compatibility-annotation pass.
//!
//! # Invariant
//!
//! After a successful pass every node in the graph, and every node embedded
//! into one, has `compatible == Some(_)`. Each verdict is computed from the
//! node itself; embedded nodes never inherit their parent's verdict.

use serde::Serialize;
use tracing::debug;

use crate::domain::{OpNode, SlimGraph};
use crate::ports::{CompatibilityProvider, CoreError};

/// Annotate every node of `graph` with the verdict of `provider`.
///
/// Fails with [`CoreError::InvalidArgument`] when no provider is given; the
/// graph is left untouched in that case.
pub fn check_ops_for_compatibility(
    graph: &mut SlimGraph,
    provider: Option<&dyn CompatibilityProvider>,
) -> Result<(), CoreError> {
    let Some(provider) = provider else {
        return Err(CoreError::InvalidArgument(
            "compatibility provider required, but got none".to_string(),
        ));
    };
    annotate_with(graph, provider);
    Ok(())
}

/// Annotate every node of `graph` with the verdict of `provider`.
pub fn annotate_with(graph: &mut SlimGraph, provider: &dyn CompatibilityProvider) {
    for node in &mut graph.nodes {
        stamp(node, provider);
        for embedded in node
            .in_embeddings
            .iter_mut()
            .chain(node.out_embeddings.iter_mut())
        {
            stamp(embedded, provider);
        }
    }
}

fn stamp(node: &mut OpNode, provider: &dyn CompatibilityProvider) {
    let compatible = provider.op_valid(node);
    debug!(
        node = %node.name,
        op = node.op.as_deref().unwrap_or("-"),
        compatible,
        "annotated op"
    );
    node.compatible = Some(compatible);
}

/// Counts of compatibility verdicts across a graph, embeddings included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilitySummary {
    pub compatible: usize,
    pub incompatible: usize,
    /// Nodes the pass has not reached.
    pub unannotated: usize,
    /// Names of incompatible nodes, in visitation order.
    pub incompatible_nodes: Vec<String>,
}

impl CompatibilitySummary {
    pub const fn total(&self) -> usize {
        self.compatible + self.incompatible + self.unannotated
    }

    pub const fn is_fully_annotated(&self) -> bool {
        self.unannotated == 0
    }
}

/// Tally the verdicts currently stored on `graph`.
pub fn summarize(graph: &SlimGraph) -> CompatibilitySummary {
    graph
        .iter_all()
        .fold(CompatibilitySummary::default(), |mut summary, node| {
            match node.compatible {
                Some(true) => summary.compatible += 1,
                Some(false) => {
                    summary.incompatible += 1;
                    summary.incompatible_nodes.push(node.name.clone());
                }
                None => summary.unannotated += 1,
            }
            summary
        })
}
