//! Command-line interface for linemark.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for classified blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Escaped HTML markup
    Html,
    /// The block AST as pretty-printed JSON
    Json,
}

/// linemark - a line-oriented markup renderer.
///
/// Classifies text line by line into blocks (headings, emphasized titles,
/// lists, paragraphs), resolves inline emphasis/code spans, and renders
/// escaped HTML or the block AST as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "lmk",
    author = "Linemark Contributors",
    version,
    about = "A line-oriented markup renderer",
    after_help = "Examples:\n  \
                  cat recommendation.md | lmk\n  \
                  lmk notes.md\n  \
                  lmk -f json notes.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}
