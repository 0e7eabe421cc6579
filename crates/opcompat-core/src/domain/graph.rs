//! Op nodes and the slim graph that holds them.

use serde::{Deserialize, Serialize};

/// Name prefix reserved for nodes that belong to a function library.
pub const FUNCTION_LIBRARY_NODE_PREFIX: &str = "__function_library__";

/// A single operation in the graph.
///
/// Small inputs and outputs are folded into their consumer for display
/// compactness; those live in `in_embeddings` / `out_embeddings` rather than
/// in the graph's node list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpNode {
    /// Fully qualified node name.
    pub name: String,

    /// Op-type identifier, if the node has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,

    /// Device placement string (e.g. `/job:worker/device:TPU:0`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Compatibility verdict. `None` until the annotation pass has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatible: Option<bool>,

    /// Input nodes folded into this node.
    pub in_embeddings: Vec<Self>,

    /// Output nodes folded into this node.
    pub out_embeddings: Vec<Self>,
}

impl OpNode {
    /// Create an unannotated node with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the op-type identifier.
    #[must_use]
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the device placement.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Append an embedded input node.
    #[must_use]
    pub fn with_in_embedding(mut self, node: Self) -> Self {
        self.in_embeddings.push(node);
        self
    }

    /// Append an embedded output node.
    #[must_use]
    pub fn with_out_embedding(mut self, node: Self) -> Self {
        self.out_embeddings.push(node);
        self
    }

    /// Whether the node lives in a function library.
    pub fn is_function_library_node(&self) -> bool {
        self.name.starts_with(FUNCTION_LIBRARY_NODE_PREFIX)
    }

    /// Op-type identifier, treating an empty string as absent.
    pub fn op_type(&self) -> Option<&str> {
        self.op.as_deref().filter(|op| !op.is_empty())
    }

    /// Iterate over this node's embedded inputs followed by its embedded outputs.
    pub fn embeddings(&self) -> impl Iterator<Item = &Self> {
        self.in_embeddings.iter().chain(self.out_embeddings.iter())
    }
}

/// The graph as seen by the annotation pass: an ordered list of op nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlimGraph {
    pub nodes: Vec<OpNode>,
}

impl SlimGraph {
    pub const fn new(nodes: Vec<OpNode>) -> Self {
        Self { nodes }
    }

    /// Iterate over every node and, after each, its embedded nodes.
    pub fn iter_all(&self) -> impl Iterator<Item = &OpNode> {
        self.nodes
            .iter()
            .flat_map(|node| std::iter::once(node).chain(node.embeddings()))
    }
}
