// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Interactive command shell over a [`WordTrie`].
//!
//! The shell reads one command per line and writes human readable results.
//! It never stops on a failed command: unreadable sources and unwritable
//! export destinations are reported and the loop continues. Only end of
//! input, `quit`/`exit`, or a failure to write the output end it.

mod command;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

pub use command::{Command, CommandError};

use crate::config::shell::ShellConfig;
use crate::config::trie::TrieConfig;
use crate::data_structures::WordTrie;
use crate::error::{ErrorContext, ErrorReporter, TracingErrorReporter};

const COMPONENT: &str = "shell";

const HELP: &str = "\
Commands:
  load <file>            Load dictionary file
  insert <word>          Insert a word
  search <word>          Search exact word
  suggest <prefix> [n]   Suggest words for prefix (optional limit n, 0 = all)
  count <prefix>         Count words sharing prefix
  export [file]          Write the trie as a Graphviz dot file
  help                   Show this help
  quit                   Exit";

/// Line-oriented shell driving a borrowed trie.
pub struct Repl<'a, R, W> {
    trie: &'a mut WordTrie,
    input: R,
    output: W,
    shell: ShellConfig,
    default_limit: usize,
    reporter: Arc<dyn ErrorReporter>,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    /// Creates a shell with default settings that reports failures through
    /// tracing.
    pub fn new(trie: &'a mut WordTrie, input: R, output: W) -> Self {
        Self {
            trie,
            input,
            output,
            shell: ShellConfig::default(),
            default_limit: TrieConfig::default().default_suggest_limit,
            reporter: Arc::new(TracingErrorReporter),
        }
    }

    /// Applies the shell and trie sections of the configuration.
    pub fn with_config(mut self, shell: ShellConfig, trie: &TrieConfig) -> Self {
        self.shell = shell;
        self.default_limit = trie.default_suggest_limit;
        self
    }

    /// Replaces the sink for failed loads and exports.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Runs the shell until end of input or `quit`.
    pub fn run(&mut self) -> io::Result<()> {
        if self.shell.show_help_on_start {
            writeln!(self.output, "{HELP}")?;
        }

        let mut buffer = Vec::new();
        loop {
            write!(self.output, "\n{}", self.shell.prompt)?;
            self.output.flush()?;

            buffer.clear();
            if self.input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(CommandError::Empty) => continue,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }

        writeln!(self.output, "Bye.")?;
        self.output.flush()
    }

    /// Executes one parsed command, writing its result.
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        debug!(?command, "Executing shell command");

        match command {
            Command::Load(path) => self.load(&path),
            Command::Insert(word) => {
                self.trie.insert(&word);
                writeln!(self.output, "Inserted: {word}")
            }
            Command::Search(word) => {
                let found = if self.trie.search(&word) { "FOUND" } else { "NOT FOUND" };
                writeln!(self.output, "{found}")
            }
            Command::Suggest { prefix, limit } => {
                let words = self
                    .trie
                    .suggest(&prefix, limit.unwrap_or(self.default_limit));
                if words.is_empty() {
                    return writeln!(self.output, "(no suggestions)");
                }
                for word in words {
                    writeln!(self.output, "  - {word}")?;
                }
                Ok(())
            }
            Command::Count(prefix) => writeln!(self.output, "{}", self.trie.count_prefix(&prefix)),
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| self.shell.export_path.clone());
                self.export(&path)
            }
            Command::Help => writeln!(self.output, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn load(&mut self, path: &Path) -> io::Result<()> {
        match self.trie.load_from_path(path) {
            Ok(_) => writeln!(self.output, "Loaded dictionary: {}", path.display()),
            Err(err) => {
                self.reporter
                    .report(ErrorContext::new(err, COMPONENT).with_details("load command"));
                writeln!(self.output, "Failed to open: {}", path.display())
            }
        }
    }

    fn export(&mut self, path: &Path) -> io::Result<()> {
        match self.trie.export_dot(path) {
            Ok(()) => writeln!(self.output, "Generated {}", path.display()),
            Err(err) => {
                self.reporter
                    .report(ErrorContext::new(err, COMPONENT).with_details("export command"));
                writeln!(self.output, "Failed to export: {}", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use std::io::Cursor;
    use tempfile::tempdir;

    mock! {
        pub Reporter {}

        impl ErrorReporter for Reporter {
            fn report(&self, context: ErrorContext);
        }
    }

    impl std::fmt::Debug for MockReporter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("MockReporter")
        }
    }

    fn quiet() -> ShellConfig {
        ShellConfig {
            show_help_on_start: false,
            ..ShellConfig::default()
        }
    }

    fn run_script(trie: &mut WordTrie, script: &str) -> String {
        let mut output = Vec::new();
        Repl::new(trie, Cursor::new(script), &mut output)
            .with_config(quiet(), &TrieConfig::default())
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_insert_search_suggest_count() {
        let mut trie = WordTrie::new();
        let script = "insert Cat\ninsert car\ninsert cap\ninsert dog\n\
                      search CAT\nsearch ca\nsuggest ca\nsuggest ca 2\ncount ca\nsuggest zz\n";
        let output = run_script(&mut trie, script);

        assert!(output.contains("Inserted: Cat\n"));
        assert!(output.contains("\ntrie> FOUND\n\ntrie> NOT FOUND\n"));
        assert!(output.contains("  - cap\n  - car\n  - cat\n"));
        assert!(output.contains("  - cap\n  - car\n\ntrie> 3\n"));
        assert!(output.contains("(no suggestions)\n"));
        assert!(output.ends_with("\ntrie> Bye.\n"));
        assert_eq!(trie.len(), 4);
    }

    #[test]
    fn test_default_limit_applies() {
        let mut trie: WordTrie = ["aa", "ab", "ac"].into_iter().collect();
        let mut output = Vec::new();
        Repl::new(&mut trie, Cursor::new("suggest a\n"), &mut output)
            .with_config(quiet(), &TrieConfig { default_suggest_limit: 2 })
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("  - ab\n"));
        assert!(!output.contains("  - ac\n"));
    }

    #[test]
    fn test_usage_unknown_and_quit() {
        let mut trie = WordTrie::new();
        let output = run_script(&mut trie, "\n   \nsearch\nfly away\nquit\ninsert never\n");

        assert!(output.contains("Usage: search <word>\n"));
        assert!(output.contains("Unknown command. Type 'help'.\n"));
        assert!(output.ends_with("Bye.\n"));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_help_on_start() {
        let mut trie = WordTrie::new();
        let mut output = Vec::new();
        Repl::new(&mut trie, Cursor::new("help\n"), &mut output)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("Commands:\n"));
        assert_eq!(output.matches("Commands:").count(), 2);
    }

    #[test]
    fn test_load_and_export() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("words.txt");
        let dot = dir.path().join("graph.dot");
        std::fs::write(&words, "Cat dog, Cat-Fish\n").unwrap();

        let mut trie = WordTrie::new();
        let script = format!("load {}\nexport {}\n", words.display(), dot.display());
        let output = run_script(&mut trie, &script);

        assert!(output.contains(&format!("Loaded dictionary: {}\n", words.display())));
        assert!(output.contains(&format!("Generated {}\n", dot.display())));
        assert!(trie.search("fish"));
        assert!(std::fs::read_to_string(&dot).unwrap().starts_with("digraph"));
    }

    #[test]
    fn test_failures_are_reported_and_shell_continues() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let unwritable = dir.path().join("no-dir").join("trie.dot");

        let mut reporter = MockReporter::new();
        reporter
            .expect_report()
            .withf(|context| context.component == COMPONENT)
            .times(2)
            .return_const(());

        let mut trie = WordTrie::new();
        let mut output = Vec::new();
        let script = format!(
            "load {}\nexport {}\ninsert ok\n",
            missing.display(),
            unwritable.display()
        );
        Repl::new(&mut trie, Cursor::new(script), &mut output)
            .with_config(quiet(), &TrieConfig::default())
            .with_reporter(Arc::new(reporter))
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains(&format!("Failed to open: {}\n", missing.display())));
        assert!(output.contains(&format!("Failed to export: {}\n", unwritable.display())));
        assert!(output.contains("Inserted: ok\n"));
        assert!(trie.search("ok"));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_shell() {
        let mut trie = WordTrie::new();
        let mut output = Vec::new();
        let input: &[u8] = b"insert caf\xe9\nsearch caf\n";
        Repl::new(&mut trie, Cursor::new(input), &mut output)
            .with_config(quiet(), &TrieConfig::default())
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.ends_with("\ntrie> FOUND\n\ntrie> Bye.\n"));
        assert!(trie.search("caf"));
    }
}
