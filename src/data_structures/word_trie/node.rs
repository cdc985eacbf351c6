// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! Each node owns up to [`ALPHABET_SIZE`] children through one slot per letter.
//! The tree is a strict ownership chain: no parent pointers, no shared nodes.

/// Number of child slots per node, one per lowercase ASCII letter.
pub(crate) const ALPHABET_SIZE: usize = 26;

/// Maps a lowercase ASCII letter to its child slot.
///
/// Callers must only pass bytes in `b'a'..=b'z'`.
#[inline]
pub(crate) fn slot_of(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    usize::from(letter - b'a')
}

/// Maps a child slot back to its lowercase letter.
#[inline]
pub(crate) fn letter_of(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_SIZE);
    char::from(b'a' + slot as u8)
}

/// A node in the word trie.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Child links indexed by `letter - 'a'`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells an inserted word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `letter`, if any.
    #[inline]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        self.children[slot_of(letter)].as_deref()
    }

    /// Returns the child reached by `letter`, creating it when absent.
    ///
    /// The flag is `true` when a new node had to be allocated.
    pub fn child_or_insert(&mut self, letter: u8) -> (&mut TrieNode, bool) {
        let slot = &mut self.children[slot_of(letter)];
        let created = slot.is_none();
        let child: &mut TrieNode = slot.get_or_insert_with(Box::default);
        (child, created)
    }

    /// Iterates over the present children in ascending letter order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.as_deref().map(|node| (letter_of(slot), node)))
    }
}

// Dropping a long chain of boxes recursively can exhaust the stack, so the
// subtree is detached onto an explicit stack and freed one node at a time.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}
