//! The block data model produced by classification.

use serde::{Deserialize, Serialize};

/// Heading level recognized by the classifier.
///
/// Only the two hash-marker levels exist in this block model; the
/// bold-title line is its own [`Block`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// `# ` marker
    H1,
    /// `## ` marker
    H2,
}

impl HeadingLevel {
    /// Numeric level (1 or 2).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "h{}", self.as_u8())
    }
}

/// An inline formatting span inside a line's text.
///
/// Spans are non-nesting and non-overlapping: a line's text is a flat
/// sequence of spans, and the content of a formatted span is plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Plain text
    Text(String),
    /// `***…***`
    BoldItalic(String),
    /// `**…**`
    Bold(String),
    /// `*…*`
    Italic(String),
    /// `` `…` ``
    Code(String),
}

impl InlineSpan {
    /// The span's inner text, regardless of formatting.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(s)
            | InlineSpan::BoldItalic(s)
            | InlineSpan::Bold(s)
            | InlineSpan::Italic(s)
            | InlineSpan::Code(s) => s,
        }
    }
}

/// One rendered unit of output.
///
/// Blocks are ordered by the position of their first contributing line
/// and have no identity beyond that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A `# ` or `## ` line. Carries the raw remainder after the marker;
    /// heading text is not inline-formatted.
    Heading { level: HeadingLevel, text: String },
    /// A line fully wrapped in `**`…`**` with no inner `**`.
    EmphasizedTitle(String),
    /// A contiguous run of `* ` / `- ` lines, one item per line.
    List(Vec<Vec<InlineSpan>>),
    /// Any other non-blank line.
    Paragraph(Vec<InlineSpan>),
}

impl Block {
    /// Number of input lines that contributed to this block.
    pub fn line_count(&self) -> usize {
        match self {
            Block::List(items) => items.len(),
            _ => 1,
        }
    }
}
