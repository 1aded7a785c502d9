//! Kumu Trie - Main entrypoint.
//!
//! This is the terminal driver for the Kumu Trie engine: the stand-in for a
//! display layer. It owns no trie logic of its own; every command goes
//! through the session interface, and the tree is rendered purely from the
//! read-only snapshot the engine hands back.

mod config;
mod error;
mod session;
mod trie;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use error::{set_error_reporter, KumuError, KumuResult, TracingErrorReporter};
use session::TrieSession;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use trie::NodeSnapshot;

/// Command line arguments for the Kumu Trie tool.
#[derive(Parser, Debug)]
#[clap(name = "Kumu Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive trie session
    Repl,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging() -> KumuResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| KumuError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> KumuResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    let env_prefix = "KUMU";
    let config_loader = config::ConfigLoader::new(args.config.as_deref(), env_prefix);

    match args.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let config = if args.config.is_some() {
                match config_loader.load() {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::error!("Configuration error: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                // No explicit file: built-in defaults plus environment overrides.
                match config::ConfigLoader::new(None::<PathBuf>, env_prefix).load() {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!("Falling back to default configuration: {}", e);
                        config::KumuConfig::default()
                    }
                }
            };
            config::init_global_config(config);

            let config = config::get_global_config();
            info!(
                "Session configured: trim={}, lowercase={}, alphabetic_only={}, max_word_len={}",
                config.get().session.trim_input,
                config.get().session.lowercase_input,
                config.get().session.alphabetic_only,
                config.get().session.max_word_len,
            );

            run_repl(TrieSession::with_config(config.get().session.clone()))
        }
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = config::KumuConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(KumuError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KumuError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(KumuError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

const HELP: &str = "\
Commands:
  insert <word>   add a word to the trie
  search <word>   check whether the word was inserted
  prefix <text>   check whether any word starts with the text
  delete <word>   remove a word, pruning unneeded nodes
  words           list all stored words
  show            render the current tree
  clear           remove everything
  help            show this message
  quit            exit";

/// Line-oriented command loop over stdin.
fn run_repl(mut session: TrieSession) -> KumuResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "Kumu Trie {} - type 'help' for commands",
        env!("CARGO_PKG_VERSION")
    );
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "insert" => report(session.insert(argument).map(|is_new| {
                if is_new {
                    "inserted"
                } else {
                    "already present"
                }
            })),
            "search" => report(session.contains(argument).map(found_label)),
            "prefix" => report(session.contains_prefix(argument).map(found_label)),
            "delete" => report(session.remove(argument).map(|removed| {
                if removed {
                    "deleted"
                } else {
                    "not found"
                }
            })),
            "words" => {
                let words = session.words();
                if words.is_empty() {
                    println!("(no words)");
                } else {
                    println!("{}", words.join(", "));
                }
            }
            "show" => render(&session.snapshot()),
            "clear" => {
                session.clear();
                println!("cleared");
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', type 'help'"),
        }
    }

    Ok(())
}

fn found_label(found: bool) -> &'static str {
    if found {
        "found"
    } else {
        "not found"
    }
}

fn report(outcome: session::SessionResult<&'static str>) {
    match outcome {
        Ok(message) => println!("{message}"),
        Err(e) => println!("rejected: {e}"),
    }
}

/// Renders the snapshot as an indented tree, one node per line.
fn render(snapshot: &NodeSnapshot) {
    fn render_node(node: &NodeSnapshot, depth: usize) {
        let label = node.label.map_or("(root)".to_string(), |c| c.to_string());
        let marker = if node.is_end_of_word { " *" } else { "" };
        println!("{}{label}{marker}", "  ".repeat(depth));
        for child in &node.children {
            render_node(child, depth + 1);
        }
    }
    render_node(snapshot, 0);
    println!("({} nodes, * = end of word)", snapshot.node_count());
}
