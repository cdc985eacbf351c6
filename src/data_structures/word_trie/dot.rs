// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Graphviz export of the trie shape.
//!
//! See [DOT Language | Graphviz](https://graphviz.org/doc/info/lang.html) for
//! the syntax. The output is a debugging artifact: node identifiers are
//! assigned in depth-first, letter-ascending order with the root as `n0`.

use std::io::{self, Write};

use super::node::TrieNode;

/// Writes a trie in "dot" notation to an output.
pub(crate) struct DotPrinter<O: Write> {
    output: O,
    next_id: usize,
}

impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the tree rooted at `root` to the given output.
    ///
    /// Returns the number of node statements written.
    pub fn print_tree(output: O, root: &TrieNode) -> io::Result<usize> {
        let mut printer = DotPrinter { output, next_id: 0 };

        printer.output_prelude()?;
        printer.walk(root)?;
        printer.output_epilogue()?;
        printer.output.flush()?;

        Ok(printer.next_id)
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "digraph Trie {{")?;
        writeln!(self.output, "    node [shape=circle, label=\"\"];")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }

    fn get_id(&mut self) -> usize {
        let new_id = self.next_id;
        self.next_id += 1;
        new_id
    }

    fn walk(&mut self, root: &TrieNode) -> io::Result<()> {
        let root_id = self.get_id();
        writeln!(
            self.output,
            "    n{root_id} [label=\"root\", shape=box, style=filled, fillcolor=lightgrey];"
        )?;

        // (node, parent id, edge letter), popped in pre-order
        let mut stack: Vec<(&TrieNode, usize, char)> = root
            .children()
            .rev()
            .map(|(letter, child)| (child, root_id, letter))
            .collect();

        while let Some((node, parent_id, letter)) = stack.pop() {
            let node_id = self.get_id();
            self.write_node(node_id, node, letter)?;
            writeln!(self.output, "    n{parent_id} -> n{node_id} [label=\"{letter}\"];")?;

            stack.extend(
                node.children()
                    .rev()
                    .map(|(letter, child)| (child, node_id, letter)),
            );
        }

        Ok(())
    }

    fn write_node(&mut self, node_id: usize, node: &TrieNode, letter: char) -> io::Result<()> {
        if node.is_terminal {
            writeln!(
                self.output,
                "    n{node_id} [label=\"{letter}\", shape=doublecircle, style=filled, fillcolor=palegreen];"
            )
        } else {
            writeln!(self.output, "    n{node_id} [label=\"{letter}\"];")
        }
    }
}
