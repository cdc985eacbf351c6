// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy depth-first enumeration of the words below a prefix node.

use std::iter::FusedIterator;

use super::node::TrieNode;

/// Pending visit: the node, its depth below the prefix node and the letter
/// on the edge that leads to it.
type Frame<'a> = (&'a TrieNode, usize, char);

/// Iterator over every stored word that starts with a given prefix.
///
/// Words are produced in ascending lexicographic order: the traversal is a
/// pre-order walk that visits children from `a` to `z`. Nothing below the
/// last yielded word is explored until the next call to [`Iterator::next`],
/// so capping the output with [`Iterator::take`] stops the walk early.
#[derive(Debug, Clone)]
pub struct Suggestions<'a> {
    stack: Vec<Frame<'a>>,
    buffer: String,
    prefix_len: usize,
}

impl<'a> Suggestions<'a> {
    /// Starts a walk at `start`, the node reached by `prefix`.
    pub(crate) fn new(start: &'a TrieNode, prefix: String) -> Self {
        Self {
            stack: vec![(start, 0, '\0')],
            prefix_len: prefix.len(),
            buffer: prefix,
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            buffer: String::new(),
            prefix_len: 0,
        }
    }
}

impl Iterator for Suggestions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth, letter)) = self.stack.pop() {
            if depth > 0 {
                self.buffer.truncate(self.prefix_len + depth - 1);
                self.buffer.push(letter);
            }

            // reversed so that `a` is popped first
            self.stack.extend(
                node.children()
                    .rev()
                    .map(|(letter, child)| (child, depth + 1, letter)),
            );

            if node.is_terminal {
                return Some(self.buffer.clone());
            }
        }
        None
    }
}

impl FusedIterator for Suggestions<'_> {}
