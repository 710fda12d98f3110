use serde::{Deserialize, Serialize};

use crate::error::{BlurError, Result};
use crate::filters::fastblur::BlurParams;
use crate::filters::unsharp_mask::UnsharpParams;

/// One filter applied to a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter")]
pub enum FilterStep {
    /// Blur every channel independently.
    Blur(BlurParams),
    /// Luma-based unsharp mask; RGBA frames only.
    Unsharp(UnsharpParams),
}

impl std::fmt::Display for FilterStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blur(p) => write!(f, "Blur (r={}, steps={}, {})", p.radius, p.steps, p.kernel),
            Self::Unsharp(p) => write!(
                f,
                "Unsharp (amount={}, threshold={})",
                p.amount, p.threshold
            ),
        }
    }
}

/// Ordered list of filters, loadable from TOML:
///
/// ```toml
/// [[steps]]
/// filter = "Blur"
/// radius = 2
/// kernel = "Box"
///
/// [[steps]]
/// filter = "Unsharp"
/// amount = 120.0
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterChain {
    #[serde(default)]
    pub steps: Vec<FilterStep>,
}

impl FilterChain {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BlurError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| BlurError::Config(e.to_string()))
    }
}
