//! Linemark Parser
//!
//! A line-oriented markup classifier. Input text is scanned line by line,
//! each line is classified into a block type, and the result is an ordered
//! sequence of [`Block`] values. Leaf text (list items and paragraphs) is
//! run through the inline span formatter.
//!
//! # Example
//!
//! ```
//! use linemark_parser::classify;
//! use linemark_core::{Block, HeadingLevel};
//!
//! let blocks = classify("# Title\n\nSome text.");
//! assert!(matches!(
//!     &blocks[0],
//!     Block::Heading { level: HeadingLevel::H1, text } if text == "Title"
//! ));
//! ```

pub mod inline;

pub use inline::format_inline;

use linemark_core::{Block, ClassifierState, HeadingLevel};
use log::trace;

/// Push-based line classifier.
///
/// Feed lines with [`push_line`](Classifier::push_line) and take the ordered
/// blocks with [`finish`](Classifier::finish). A list group accumulates
/// across consecutive list-marker lines and is flushed when a blank line or
/// any non-list line arrives, or at end of input.
///
/// Every invocation owns its own accumulator; independent classifiers are
/// safe to run concurrently on independent inputs.
#[derive(Debug, Default)]
pub struct Classifier {
    /// Raw item texts of the pending list group
    pending: Vec<String>,
    /// Completed blocks in input order
    blocks: Vec<Block>,
}

impl Classifier {
    /// Create a new classifier in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state: idle, or accumulating a pending list group.
    pub fn state(&self) -> ClassifierState {
        if self.pending.is_empty() {
            ClassifierState::Idle
        } else {
            ClassifierState::Accumulating
        }
    }

    /// Classify a single line.
    ///
    /// The line is trimmed before classification; original indentation is
    /// not preserved. Classification is total: any input line contributes
    /// to exactly one block, or (if blank) only forces a list flush.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim();

        // Blank line: flush the pending list, emit nothing.
        if line.is_empty() {
            self.flush_list();
            return;
        }

        // The `## ` check must precede `# `.
        if let Some(rest) = line.strip_prefix("## ") {
            self.flush_list();
            trace!("h2: {}", rest);
            self.blocks.push(Block::Heading {
                level: HeadingLevel::H2,
                text: rest.to_string(),
            });
            return;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            self.flush_list();
            trace!("h1: {}", rest);
            self.blocks.push(Block::Heading {
                level: HeadingLevel::H1,
                text: rest.to_string(),
            });
            return;
        }

        if let Some(title) = emphasized_title(line) {
            self.flush_list();
            trace!("title: {}", title);
            self.blocks.push(Block::EmphasizedTitle(title.to_string()));
            return;
        }

        if let Some(item) = list_item(line) {
            trace!("list item: {}", item);
            self.pending.push(item.to_string());
            return;
        }

        // Anything else, including degenerate lines, is a paragraph.
        self.flush_list();
        trace!("paragraph: {}", line);
        self.blocks.push(Block::Paragraph(format_inline(line)));
    }

    /// Flush the pending list group, if non-empty, as a completed block.
    ///
    /// The list occupies the position of its first contributing line, which
    /// is where this is always called from: before any later block is
    /// pushed.
    fn flush_list(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.pending)
            .iter()
            .map(|item| format_inline(item))
            .collect();
        self.blocks.push(Block::List(items));
    }

    /// End of input: flush any pending list and return the blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.blocks
    }
}

/// Inner text of a line fully wrapped in `**`…`**`, if any.
///
/// Requires a distinct opening and closing marker (so `**` and `***` alone
/// do not qualify) and no further `**` inside.
fn emphasized_title(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("**")?.strip_suffix("**")?;
    if inner.contains("**") {
        return None;
    }
    Some(inner)
}

/// Remainder of a list-marker line (`* ` or `- `), if any.
fn list_item(line: &str) -> Option<&str> {
    line.strip_prefix("* ").or_else(|| line.strip_prefix("- "))
}

/// Classify a complete body of text into ordered blocks.
///
/// Splits on `\n`; a trailing `\r` on each line is removed by the trim
/// step, so CRLF input classifies identically.
pub fn classify(text: &str) -> Vec<Block> {
    let mut classifier = Classifier::new();
    for line in text.split('\n') {
        classifier.push_line(line);
    }
    classifier.finish()
}

// =============================================================================
// Tests
// =============================================================================
