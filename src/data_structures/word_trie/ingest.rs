// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bulk loading of words from free-form text.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use super::{TrieError, TrieResult, WordTrie};

/// Counters collected while loading a text source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read from the source.
    pub lines: usize,
    /// Tokens handed to [`WordTrie::insert`], duplicates included.
    pub tokens: usize,
    /// Tokens that were not stored before.
    pub new_words: usize,
}

impl WordTrie {
    /// Loads every word of the text at `path`.
    ///
    /// Runs of ASCII letters become words; any other byte or a line end
    /// separates them. Fails only when the source cannot be opened or read.
    /// When opening fails nothing is inserted.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> TrieResult<LoadStats> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "Cannot open text source");
            TrieError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let stats = self
            .load_from_reader(BufReader::new(file))
            .map_err(|source| {
                warn!(path = %path.display(), error = %source, "Text source read failed");
                TrieError::SourceUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        info!(
            path = %path.display(),
            lines = stats.lines,
            tokens = stats.tokens,
            new_words = stats.new_words,
            "Loaded text source"
        );
        Ok(stats)
    }

    /// Loads every word of a buffered text stream.
    ///
    /// Input is scanned byte-wise, so bytes outside ASCII (including invalid
    /// UTF-8) only act as separators.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<LoadStats> {
        let mut stats = LoadStats::default();
        let mut token = String::new();

        for line in reader.split(b'\n') {
            let line = line?;
            stats.lines += 1;

            for byte in line {
                if byte.is_ascii_alphabetic() {
                    token.push(char::from(byte.to_ascii_lowercase()));
                } else {
                    self.flush_token(&mut token, &mut stats);
                }
            }
            self.flush_token(&mut token, &mut stats);
        }

        debug!(?stats, "Finished reading text stream");
        Ok(stats)
    }

    fn flush_token(&mut self, token: &mut String, stats: &mut LoadStats) {
        if token.is_empty() {
            return;
        }
        stats.tokens += 1;
        if self.insert(token.as_str()) {
            stats.new_words += 1;
        }
        token.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_reader_splits_on_non_letters() {
        let mut trie = WordTrie::new();
        let stats = trie
            .load_from_reader(Cursor::new("Cat dog, Cat-Fish"))
            .unwrap();

        assert_eq!(
            stats,
            LoadStats {
                lines: 1,
                tokens: 4,
                new_words: 3
            }
        );
        assert!(trie.search("cat"));
        assert!(trie.search("dog"));
        assert!(trie.search("fish"));
        assert!(!trie.search("catfish"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_reader_line_end_terminates_token() {
        let mut trie = WordTrie::new();
        let stats = trie
            .load_from_reader(Cursor::new("alpha\nbeta\r\n\ngamma"))
            .unwrap();

        assert_eq!(stats.lines, 4);
        assert_eq!(stats.tokens, 3);
        assert_eq!(trie.suggest("a", 0), vec!["alpha"]);
        assert!(!trie.search("alphabeta"));
        assert!(trie.search("gamma"));
    }

    #[test]
    fn test_reader_tolerates_invalid_utf8() {
        let mut trie = WordTrie::new();
        let bytes: &[u8] = b"na\xffve \xc3\xa9t\xc3\xa9";
        let stats = trie.load_from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(stats.tokens, 3);
        assert!(trie.search("na"));
        assert!(trie.search("ve"));
        assert!(trie.search("t"));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "apple\nApplication apply\n").unwrap();

        let mut trie = WordTrie::new();
        let stats = trie.load_from_path(&path).unwrap();

        assert_eq!(stats.new_words, 3);
        assert_eq!(trie.count_prefix("app"), 3);
    }

    #[test]
    fn test_load_missing_path_leaves_trie_unchanged() {
        let dir = tempdir().unwrap();
        let mut trie = WordTrie::new();
        trie.insert("keep");

        let err = trie
            .load_from_path(dir.path().join("missing.txt"))
            .unwrap_err();

        assert!(matches!(err, TrieError::SourceUnreadable { .. }));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 5);
    }
}
