//! Wordtrie - Main entrypoint.
//!
//! This is the main entry point for the word index shell.
//! It loads configuration, initializes the logging system, preloads any
//! requested text sources and starts the interactive shell.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

use wordtrie_lib::cli::Repl;
use wordtrie_lib::config::{self, ConfigLoader, LogConfig, Validate, WordTrieConfig};
use wordtrie_lib::data_structures::WordTrie;
use wordtrie_lib::error::{ErrorContext, ErrorReporter, TracingErrorReporter};

/// Command line arguments for the word index.
#[derive(Parser, Debug)]
#[clap(name = "wordtrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Text files to load before running the command (repeatable)
    #[clap(short, long, value_parser)]
    load: Vec<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell on stdin/stdout
    Repl,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Write the trie built from the loaded files as a Graphviz dot file
    Export {
        /// Path to output dot file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they never interleave with shell output.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.context("Failed to set global tracing subscriber")
}

/// Loads every preload source, reporting the ones that cannot be read.
fn preload(trie: &mut WordTrie, sources: &[PathBuf], reporter: &dyn ErrorReporter) {
    for source in sources {
        if let Err(err) = trie.load_from_path(source) {
            reporter.report(ErrorContext::new(err, "preload").with_details("--load argument"));
        }
    }
    info!(words = trie.len(), nodes = trie.node_count(), "Preload finished");
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    let reporter = Arc::new(TracingErrorReporter);

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let mut trie = WordTrie::new();
            preload(&mut trie, &args.load, reporter.as_ref());

            let WordTrieConfig { trie: trie_config, shell, .. } = config;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let result = Repl::new(&mut trie, stdin.lock(), stdout.lock())
                .with_config(shell, &trie_config)
                .with_reporter(reporter)
                .run();
            result.context("Shell terminated on an I/O error")
        }
        Command::Validate => {
            config.validate()?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            WordTrieConfig::default().write_toml(&output)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Export { output } => {
            let mut trie = WordTrie::new();
            preload(&mut trie, &args.load, reporter.as_ref());
            trie.export_dot(&output)?;
            println!("Generated {}", output.display());
            Ok(())
        }
    }
}
