// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! This module provides a prefix tree over the 26 lowercase ASCII letters with
//! exact membership, capped prefix suggestions, prefix counts, bulk loading
//! from free-form text and a Graphviz export of its shape.
//!
//! Every string handed to the trie is first [normalized](normalize): letters
//! are lowercased and everything else is dropped. A string without letters is
//! never stored and never matches.
//!
//! # Examples
//!
//! ```
//! use wordtrie_lib::data_structures::WordTrie;
//!
//! let trie: WordTrie = ["cat", "car", "cap", "dog"].into_iter().collect();
//!
//! assert!(trie.search("CAT!"));
//! assert_eq!(trie.suggest("ca", 0), vec!["cap", "car", "cat"]);
//! assert_eq!(trie.suggest("ca", 2), vec!["cap", "car"]);
//! assert_eq!(trie.count_prefix("ca"), 3);
//! ```

mod dot;
mod error;
mod ingest;
mod node;
mod normalize;
mod suggest;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use dot::DotPrinter;
use node::TrieNode;
use normalize::is_normalized;

pub use error::TrieError;
pub use ingest::LoadStats;
pub use normalize::normalize;
pub use suggest::Suggestions;

/// Result type for word trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// A prefix tree of lowercase ASCII words.
///
/// Key features:
/// * Case-insensitive, letters-only keys
/// * Suggestions in lexicographic order with an optional cap
/// * Nodes are allocated lazily and never removed
///
/// Mutation needs `&mut self`; share a trie across threads behind an
/// external lock.
#[derive(Debug)]
pub struct WordTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of terminal nodes
    words: usize,

    /// Number of nodes, root included
    nodes: usize,
}

impl WordTrie {
    /// Creates a new empty `WordTrie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            words: 0,
            nodes: 1,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// The word is normalized first; if nothing is left the call is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if it was already
    /// present or normalized to an empty string.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) -> bool {
        let word = normalize(word.as_ref());
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for letter in word.bytes() {
            let (child, created) = node.child_or_insert(letter);
            if created {
                self.nodes += 1;
            }
            node = child;
        }

        let is_new = !node.is_terminal;
        if is_new {
            node.is_terminal = true;
            self.words += 1;
        }
        is_new
    }

    /// Checks whether exactly this word was inserted.
    ///
    /// A string that only exists as the prefix of longer words is not a
    /// match.
    pub fn search<W: AsRef<str>>(&self, word: W) -> bool {
        let word = normalize(word.as_ref());
        if word.is_empty() {
            return false;
        }
        self.walk(&word).is_some_and(|node| node.is_terminal)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    pub fn contains_prefix<P: AsRef<str>>(&self, prefix: P) -> bool {
        let prefix = normalize(prefix.as_ref());
        !prefix.is_empty() && self.walk(&prefix).is_some()
    }

    /// Returns up to `limit` stored words starting with `prefix`, in
    /// lexicographic order.
    ///
    /// A `limit` of `0` returns every match. The prefix itself is included
    /// when it is a stored word.
    pub fn suggest<P: AsRef<str>>(&self, prefix: P, limit: usize) -> Vec<String> {
        let suggestions = self.suggestions(prefix);
        if limit == 0 {
            suggestions.collect()
        } else {
            suggestions.take(limit).collect()
        }
    }

    /// Lazily iterates over the stored words starting with `prefix`.
    ///
    /// Yields nothing for a prefix without letters or without matches.
    pub fn suggestions<P: AsRef<str>>(&self, prefix: P) -> Suggestions<'_> {
        let prefix = normalize(prefix.as_ref());
        if prefix.is_empty() {
            return Suggestions::empty();
        }
        match self.walk(&prefix) {
            Some(start) => Suggestions::new(start, prefix.into_owned()),
            None => Suggestions::empty(),
        }
    }

    /// Counts the stored words starting with `prefix`, the prefix itself
    /// included.
    pub fn count_prefix<P: AsRef<str>>(&self, prefix: P) -> usize {
        let prefix = normalize(prefix.as_ref());
        if prefix.is_empty() {
            return 0;
        }
        let Some(start) = self.walk(&prefix) else {
            return 0;
        };

        let mut count = 0;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if node.is_terminal {
                count += 1;
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
        count
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes, root included.
    ///
    /// This is one more than the number of distinct prefixes of stored
    /// words, and equal to the node statements written by [`Self::write_dot`].
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Writes the trie as a Graphviz digraph.
    pub fn write_dot<O: Write>(&self, output: O) -> io::Result<()> {
        DotPrinter::print_tree(output, &self.root).map(|_| ())
    }

    /// Writes the trie as a Graphviz digraph to the file at `path`.
    ///
    /// The export is a diagnostic artifact; callers may ignore the error.
    pub fn export_dot<P: AsRef<Path>>(&self, path: P) -> TrieResult<()> {
        let path = path.as_ref();
        let result = File::create(path)
            .and_then(|file| DotPrinter::print_tree(BufWriter::new(file), &self.root));

        match result {
            Ok(nodes) => {
                info!(path = %path.display(), nodes, "Exported trie graph");
                Ok(())
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "Trie graph export failed");
                Err(TrieError::ExportFailed {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Follows an already normalized path from the root.
    fn walk(&self, path: &str) -> Option<&TrieNode> {
        debug_assert!(is_normalized(path));
        path.bytes().try_fold(&self.root, |node, letter| node.child(letter))
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<str>> Extend<W> for WordTrie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for WordTrie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
