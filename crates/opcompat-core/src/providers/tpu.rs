//! TPU compatibility heuristics.

use crate::domain::OpNode;
use crate::ports::CompatibilityProvider;

/// Judges whether ops are likely to run on a TPU.
///
/// This is a best-effort check. Device strings may be missing or ambiguous,
/// so anything placed on a CPU or GPU is assumed to run elsewhere and is not
/// judged at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct TpuCompatibilityProvider;

impl TpuCompatibilityProvider {
    /// Op identifiers currently known to be valid on the TPU.
    pub const WHITELIST: &'static [&'static str] = &[
        "Negative_28",
        "Multiply_52",
        "Multiply_12188",
        "Negative_12189",
        "Multiply_12190",
        "Multiply_12192",
        "Divide_12193",
        "Divide_12195",
        "Divide_12196",
        "Divide_12198",
    ];

    /// Whether `op` appears in [`Self::WHITELIST`].
    pub fn is_whitelisted(op: &str) -> bool {
        Self::WHITELIST.contains(&op)
    }

    fn is_placed_off_tpu(device: &str) -> bool {
        let device = device.to_lowercase();
        device.contains("cpu:") || device.contains("gpu:")
    }

    // Matched exactly as written; `tpu_system` in lower case does not count.
    fn is_tpu_system(device: &str) -> bool {
        device.contains("TPU_SYSTEM")
    }
}

impl CompatibilityProvider for TpuCompatibilityProvider {
    fn op_valid(&self, node: &OpNode) -> bool {
        // Function library nodes are for internal use.
        if node.is_function_library_node() {
            return true;
        }
        let Some(op) = node.op_type() else {
            return true;
        };
        if let Some(device) = node.device.as_deref() {
            if Self::is_placed_off_tpu(device) || Self::is_tpu_system(device) {
                return true;
            }
        }
        Self::is_whitelisted(op)
    }
}
