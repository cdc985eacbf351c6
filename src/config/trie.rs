//! Trie query configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// Default cap on the number of suggestions returned by the shell.
pub const DEFAULT_SUGGEST_LIMIT: usize = 20;

/// Trie query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Suggestion cap used when a `suggest` command gives none (0 = unlimited)
    pub default_suggest_limit: usize,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            default_suggest_limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every value is meaningful: 0 disables the cap
        Ok(())
    }
}
