//! Concrete compatibility providers and target selection.

mod permissive;
mod tpu;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ports::{CompatibilityProvider, CoreError};

pub use permissive::PermissiveCompatibilityProvider;
pub use tpu::TpuCompatibilityProvider;

/// Execution target to check an op graph against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTarget {
    /// Tensor processing unit, judged by [`TpuCompatibilityProvider`].
    #[default]
    Tpu,
    /// No target; every node is compatible.
    None,
}

impl CompatibilityTarget {
    /// All targets, in display order.
    pub const ALL: [Self; 2] = [Self::Tpu, Self::None];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tpu => "tpu",
            Self::None => "none",
        }
    }

    /// Build the provider that judges this target.
    pub fn provider(self) -> Box<dyn CompatibilityProvider> {
        match self {
            Self::Tpu => Box::new(TpuCompatibilityProvider),
            Self::None => Box::new(PermissiveCompatibilityProvider),
        }
    }
}

impl fmt::Display for CompatibilityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibilityTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|target| target.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown compatibility target '{s}' (expected one of: tpu, none)"
                ))
            })
    }
}
