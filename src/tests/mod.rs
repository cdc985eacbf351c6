//! Test modules for the word index.
//!
//! This module contains the crate-level testing infrastructure, including:
//! - Configuration loading and validation tests
//! - Error type and reporter tests
//! - Shared property-based strategies and fixtures
//!
//! Component unit tests live next to their modules.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, text_strategy, word_strategy, TestFixture};
