use crate::domain::OpNode;
use crate::ports::CompatibilityProvider;

/// Provider that accepts every node.
///
/// Used when no execution target is selected, so downstream rendering sees
/// the whole graph as compatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveCompatibilityProvider;

impl CompatibilityProvider for PermissiveCompatibilityProvider {
    fn op_valid(&self, _node: &OpNode) -> bool {
        true
    }
}
