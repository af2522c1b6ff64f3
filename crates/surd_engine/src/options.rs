//! Simplification options.
//!
//! Options are plain data so callers can keep them in a TOML file next to
//! whatever drives the engine; nothing here reads the filesystem.

use crate::error::CasError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyOptions {
    /// Run the root-level `(a+b)*c` distribution
    pub distribute: bool,
    /// Run the recursive `sqrt(x)*sqrt(x)` cancellation
    pub cancel_sqrt: bool,
    /// Upper bound on full passes over the rule list
    pub max_passes: usize,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            distribute: true,
            cancel_sqrt: true,
            max_passes: 8,
        }
    }
}

impl SimplifyOptions {
    /// Parse options from TOML; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CasError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, CasError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
