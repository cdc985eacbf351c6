// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the word trie.
//!
//! Only I/O at the edges of the trie can fail. Queries and insertions treat
//! input without letters as a neutral no-op instead of an error.

use std::path::PathBuf;

/// Errors that can occur in word trie operations.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// The text source for a bulk load could not be opened or read.
    #[error("Failed to read source '{}': {source}", .path.display())]
    SourceUnreadable {
        /// Path of the source.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The graph export destination could not be written.
    #[error("Failed to export graph to '{}': {source}", .path.display())]
    ExportFailed {
        /// Path of the destination.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TrieError {
    /// Returns the path the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceUnreadable { path, .. } | Self::ExportFailed { path, .. } => path,
        }
    }
}
