//! Wordtrie Library
//!
//! This library contains the core components of the word index: the trie
//! engine, the interactive command shell, configuration and error handling.
//! The library is designed to be used by the binary crate, but can also
//! be used as a dependency by other projects.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - One owner of the trie, all mutation through `&mut`
//! - Dependency injection for testability (readers, writers, error reporters)
//! - Comprehensive error handling and propagation
//! - No recursion over caller-controlled depth

// Re-export public modules
pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the word index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
