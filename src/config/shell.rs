//! Interactive shell configuration module.
//!
//! This module defines the prompt, startup banner and default export
//! destination of the line-oriented command shell.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Interactive shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt printed before each command
    pub prompt: String,

    /// Whether to print the command list when the shell starts
    pub show_help_on_start: bool,

    /// Destination of `export` when no path is given
    pub export_path: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "trie> ".to_string(),
            show_help_on_start: true,
            export_path: PathBuf::from("trie.dot"),
        }
    }
}

impl Validate for ShellConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Shell prompt cannot be empty".to_string(),
            ));
        }

        if self.export_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "export_path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
