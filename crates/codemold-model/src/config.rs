//! Construction-session configuration.

use codemold_common::limits::MAX_SUBSTITUTION_DEPTH;
use serde::{Deserialize, Serialize};

/// Which finality a superclass must have for `extends_class` to accept it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSuperclassPolicy {
    /// A final class cannot be extended.
    #[default]
    RejectFinal,
    /// Only a final class can be extended. This reproduces the inverted
    /// check of earlier code generators that some output depends on.
    RequireFinal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub final_superclass_policy: FinalSuperclassPolicy,
    /// Depth at which substitution stops descending.
    pub max_substitution_depth: u32,
    /// Treat reserved words as taken in every variable scope.
    pub reject_reserved_words: bool,
    /// Package used by `CodeModel::class` and friends.
    pub default_package: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            final_superclass_policy: FinalSuperclassPolicy::default(),
            max_substitution_depth: MAX_SUBSTITUTION_DEPTH,
            reject_reserved_words: true,
            default_package: String::new(),
        }
    }
}

impl ModelConfig {
    /// Parse a configuration; missing keys take their default values.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_final_superclass_policy(mut self, policy: FinalSuperclassPolicy) -> Self {
        self.final_superclass_policy = policy;
        self
    }

    pub fn with_default_package(mut self, package: impl Into<String>) -> Self {
        self.default_package = package.into();
        self
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
