//! # datakit CLI (`dk`)
//!
//! Command-line access to the datakit helpers. Structured input and output
//! are JSON; input comes from `--input <file>` or stdin.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dk hash [TEXT]` | SHA-256 of TEXT, `--file`, or stdin |
//! | `dk flatten` | Flatten a nested JSON object into dot-notation keys |
//! | `dk chunk` | Split a JSON array into fixed-size chunks |
//!
//! ## Examples
//!
//! ```bash
//! dk hash "hello"
//! echo '{"a": {"b": 1}}' | dk flatten --prefix root
//! dk chunk --input items.json --size 3 --config ./dk.toml
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use datakit::{cmd, config};

/// datakit CLI — hash strings, flatten nested JSON objects, and chunk
/// JSON arrays.
#[derive(Parser)]
#[command(name = "dk", about = "datakit — small data helpers over JSON", version)]
struct Cli {
    /// Path to a configuration file (TOML).
    ///
    /// Optional. When omitted, built-in defaults are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 digest (lowercase hex) of the input.
    ///
    /// Hashes TEXT if given, else the bytes of `--file`, else stdin.
    Hash {
        /// Text to hash.
        text: Option<String>,

        /// Hash the contents of this file instead.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Flatten a nested JSON object into a single-level object.
    ///
    /// Nested keys are joined with the separator (default `.`). Empty nested
    /// objects produce no keys; arrays and scalars are kept as leaves.
    Flatten {
        /// JSON file to read (defaults to stdin).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Prefix applied to every produced key.
        #[arg(long)]
        prefix: Option<String>,

        /// Separator used to join path components.
        #[arg(long)]
        separator: Option<String>,
    },

    /// Split a JSON array into chunks of a fixed size.
    Chunk {
        /// JSON file to read (defaults to stdin).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Chunk size. Falls back to `chunking.default_size` from config.
        #[arg(long)]
        size: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = config::load_or_default(cli.config.as_deref())?;
    tracing::debug!(?cfg, "loaded configuration");

    match cli.command {
        Commands::Hash { text, file } => {
            cmd::run_hash(text.as_deref(), file.as_deref())?;
        }
        Commands::Flatten {
            input,
            prefix,
            separator,
        } => {
            cmd::run_flatten(&cfg, input.as_deref(), prefix.as_deref(), separator.as_deref())?;
        }
        Commands::Chunk { input, size } => {
            cmd::run_chunk(&cfg, input.as_deref(), size)?;
        }
    }

    Ok(())
}
