use std::io::Write;

use opcompat_core::TpuCompatibilityProvider;

use crate::error::CliError;

/// Print the TPU whitelist, one op per line.
pub fn execute(out: &mut impl Write) -> Result<(), CliError> {
    for op in TpuCompatibilityProvider::WHITELIST {
        writeln!(out, "{op}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_op_in_order() {
        let mut out = Vec::<u8>::new();
        execute(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, TpuCompatibilityProvider::WHITELIST);
    }
}
