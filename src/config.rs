use serde::{Deserialize, Serialize};

use crate::core::constants::programs;

/// Options controlling transaction analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParseConfig {
    /// Propagate per-instruction decode failures instead of skipping them.
    #[serde(default = "ParseConfig::default_throw_error")]
    pub throw_error: bool,
    /// Override the aggregator program id (forks sharing the wire layout).
    #[serde(default)]
    pub program_id: Option<String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            throw_error: Self::default_throw_error(),
            program_id: None,
        }
    }
}

impl ParseConfig {
    const fn default_throw_error() -> bool {
        false
    }

    pub fn target_program(&self) -> &str {
        self.program_id.as_deref().unwrap_or(programs::JUPITER_V6)
    }
}
