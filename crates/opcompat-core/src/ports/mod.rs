//! Port definitions (trait abstractions) and the core error type.
//!
//! The annotation pass depends only on [`CompatibilityProvider`]; concrete
//! targets live in [`crate::providers`].

use thiserror::Error;

use crate::domain::OpNode;

/// Capability check for a single execution target.
///
/// Implementations decide whether an op node is considered valid on their
/// target. They must not rely on the node's current `compatible` flag.
#[cfg_attr(test, mockall::automock)]
pub trait CompatibilityProvider: Send + Sync {
    /// Whether `node` is considered valid for this provider's target.
    fn op_valid(&self, node: &OpNode) -> bool;
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required argument was missing or unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
