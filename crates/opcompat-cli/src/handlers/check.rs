//! Single-node check handler.

use std::io::Write;

use opcompat_core::{CompatibilityProvider, CompatibilityTarget, OpNode};
use tracing::debug;

use crate::error::CliError;

/// Judge one node against `target` and print `compatible` or `incompatible`.
pub fn execute(
    node: &OpNode,
    target: CompatibilityTarget,
    out: &mut impl Write,
) -> Result<bool, CliError> {
    let compatible = target.provider().op_valid(node);
    debug!(node = %node.name, %target, compatible, "checked op");

    let verdict = if compatible { "compatible" } else { "incompatible" };
    writeln!(out, "{verdict}")?;
    Ok(compatible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(node: &OpNode) -> String {
        let mut out = Vec::<u8>::new();
        execute(node, CompatibilityTarget::Tpu, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_verdict() {
        assert_eq!(check(&OpNode::new("a").with_op("Multiply_52")), "compatible\n");
        assert_eq!(check(&OpNode::new("b").with_op("UnknownOp")), "incompatible\n");
        assert_eq!(
            check(&OpNode::new("c").with_op("UnknownOp").with_device("/device:CPU:0")),
            "compatible\n"
        );
    }
}
