//! `jsonm` CLI: render, check, and query JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Re-render every document on stdin, one per line
//! echo '{"name":"Alice","scores":[95,87]}' | jsonm render
//!
//! # Render from file to file
//! jsonm render -i data.json -o data.out
//!
//! # Validate a stream and count its documents
//! jsonm check -i stream.json --max-depth 64
//!
//! # Look up a top-level key in the last document
//! jsonm get name -i data.json
//!
//! # Show parser diagnostics (-v debug, -vv trace)
//! jsonm -v check -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use jsonm_core::{ParseOptions, Value};
use log::{debug, LevelFilter};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jsonm", version, about = "Parse, check and render JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every document in the input and write each one rendered on its own line
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum container nesting depth
        #[arg(long, default_value_t = jsonm_core::options::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Validate the input and print how many documents it holds
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum container nesting depth
        #[arg(long, default_value_t = jsonm_core::options::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Look up a top-level key in the last document and render its value
    Get {
        /// Key to look up
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let documents = parse_documents(&text, max_depth)?;
            let mut rendered = String::new();
            for document in &documents {
                rendered.push_str(&jsonm_core::render(document));
                rendered.push('\n');
            }
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            let documents = parse_documents(&text, max_depth)?;
            println!("{} document(s) valid", documents.len());
        }
        Commands::Get { key, input } => {
            let text = read_input(input.as_deref())?;
            let document = jsonm_core::parse(&text).context("Failed to parse input")?;
            let value = document
                .get(&key)
                .with_context(|| format!("Failed to look up key: {}", key))?;
            println!("{}", value);
        }
    }

    Ok(())
}

/// Install `env_logger`. `RUST_LOG` wins over the `-v` count when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_documents(text: &str, max_depth: usize) -> Result<Vec<Value>> {
    let options = ParseOptions::new().with_max_depth(max_depth);
    let documents =
        jsonm_core::parse_all_with_options(text, options).context("Failed to parse input")?;
    debug!("parsed {} document(s)", documents.len());
    Ok(documents)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
