//! linemark - a line-oriented markup renderer.
//!
//! This binary provides the CLI interface to the linemark library,
//! classifying input from files or stdin and emitting rendered HTML
//! or the block AST as JSON.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use linemark_core::{Block, LinemarkError, Result};
use linemark_parser::Classifier;
use linemark_render::HtmlRenderer;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    setup_logging(&cli.log_level);
    info!("linemark v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    if cli.should_read_stdin() {
        run_stdin(cli)
    } else {
        run_files(cli)
    }
}

/// Classify input from stdin.
fn run_stdin(cli: &Cli) -> Result<()> {
    info!("Reading from stdin");

    let stdin = io::stdin();
    let mut classifier = Classifier::new();

    for line in stdin.lock().lines() {
        let line = line?;
        trace!("input line: {}", line);
        classifier.push_line(&line);
    }

    emit(cli, &classifier.finish())
}

/// Classify input files, one document per file.
fn run_files(cli: &Cli) -> Result<()> {
    for path in &cli.files {
        info!("Processing file: {}", path.display());
        let blocks = classify_file(path)?;
        emit(cli, &blocks)?;
    }
    Ok(())
}

/// Read and classify a single file.
fn classify_file(path: &Path) -> Result<Vec<Block>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut classifier = Classifier::new();
    for line in reader.lines() {
        classifier.push_line(&line?);
    }

    Ok(classifier.finish())
}

/// Emit classified blocks in the requested output format.
fn emit(cli: &Cli, blocks: &[Block]) -> Result<()> {
    debug!("classified {} blocks", blocks.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Html => {
            let mut renderer = HtmlRenderer::new(&mut out);
            renderer.render_all(blocks)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, blocks)
                .map_err(|e| LinemarkError::Serialize(e.to_string()))?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
