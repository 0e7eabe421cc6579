//! Core domain types.
//!
//! These types mirror the slim graph handed over by the graph builder. They
//! carry no rendering or placement logic.

mod graph;

pub use graph::{FUNCTION_LIBRARY_NODE_PREFIX, OpNode, SlimGraph};
