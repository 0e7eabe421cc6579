//! Core types and the compatibility-annotation pass for op graphs.
//!
//! A [`SlimGraph`] holds op nodes produced by some external graph builder.
//! [`check_ops_for_compatibility`] walks those nodes (and the nodes embedded
//! into them) and stamps each one with the verdict of a
//! [`CompatibilityProvider`].
//!
//! ```rust
//! use opcompat_core::{OpNode, SlimGraph, TpuCompatibilityProvider, check_ops_for_compatibility};
//!
//! let mut graph = SlimGraph::new(vec![
//!     OpNode::new("mul").with_op("Multiply_52"),
//!     OpNode::new("odd").with_op("UnknownOp"),
//! ]);
//! check_ops_for_compatibility(&mut graph, Some(&TpuCompatibilityProvider)).unwrap();
//!
//! assert_eq!(graph.nodes[0].compatible, Some(true));
//! assert_eq!(graph.nodes[1].compatible, Some(false));
//! ```

#![deny(unused_crate_dependencies)]

pub mod annotate;
pub mod domain;
pub mod ports;
pub mod providers;

pub use annotate::{CompatibilitySummary, annotate_with, check_ops_for_compatibility, summarize};
pub use domain::{FUNCTION_LIBRARY_NODE_PREFIX, OpNode, SlimGraph};
pub use ports::{CompatibilityProvider, CoreError};
pub use providers::{CompatibilityTarget, PermissiveCompatibilityProvider, TpuCompatibilityProvider};

// serde_json is only exercised by the integration tests
#[cfg(test)]
use serde_json as _;
