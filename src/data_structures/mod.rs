//! Data structures for the word index.
//!
//! This module contains the trie engine behind every shell command.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Iterative traversals, so input length never bounds the call stack
//! - Lazy allocation of nodes

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{LoadStats, TrieError, TrieResult, WordTrie};
