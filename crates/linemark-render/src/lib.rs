//! Linemark Render
//!
//! Renders classified [`Block`] values as HTML markup. All user-controlled
//! text is escaped on the way out; the markup structure itself comes only
//! from the block and span variants, never from the input.
//!
//! # Example
//!
//! ```
//! use linemark_core::{Block, HeadingLevel};
//! use linemark_render::render_to_string;
//!
//! let blocks = vec![Block::Heading {
//!     level: HeadingLevel::H1,
//!     text: "Hello".to_string(),
//! }];
//! assert_eq!(render_to_string(&blocks), "<h1>Hello</h1>\n");
//! ```

use linemark_core::{Block, HeadingLevel, InlineSpan};
use std::io::{self, Write};

/// HTML renderer over a writer.
///
/// Writes one block per line to the underlying sink.
#[derive(Debug)]
pub struct HtmlRenderer<W: Write> {
    writer: W,
}

impl<W: Write> HtmlRenderer<W> {
    /// Create a renderer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Render a single block.
    pub fn render_block(&mut self, block: &Block) -> io::Result<()> {
        match block {
            Block::Heading { level, text } => {
                let tag = match level {
                    HeadingLevel::H1 => "h1",
                    HeadingLevel::H2 => "h2",
                };
                write!(self.writer, "<{}>{}</{}>", tag, escape(text), tag)?;
            }
            // The bold-title line renders as a third-level heading.
            Block::EmphasizedTitle(text) => {
                write!(self.writer, "<h3>{}</h3>", escape(text))?;
            }
            Block::List(items) => {
                write!(self.writer, "<ul>")?;
                for item in items {
                    write!(self.writer, "<li>")?;
                    self.render_spans(item)?;
                    write!(self.writer, "</li>")?;
                }
                write!(self.writer, "</ul>")?;
            }
            Block::Paragraph(spans) => {
                write!(self.writer, "<p>")?;
                self.render_spans(spans)?;
                write!(self.writer, "</p>")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    /// Render an ordered sequence of blocks.
    pub fn render_all(&mut self, blocks: &[Block]) -> io::Result<()> {
        for block in blocks {
            self.render_block(block)?;
        }
        Ok(())
    }

    fn render_spans(&mut self, spans: &[InlineSpan]) -> io::Result<()> {
        for span in spans {
            match span {
                InlineSpan::Text(s) => write!(self.writer, "{}", escape(s))?,
                InlineSpan::Bold(s) => {
                    write!(self.writer, "<strong>{}</strong>", escape(s))?
                }
                InlineSpan::Italic(s) => write!(self.writer, "<em>{}</em>", escape(s))?,
                InlineSpan::BoldItalic(s) => {
                    write!(self.writer, "<strong><em>{}</em></strong>", escape(s))?
                }
                InlineSpan::Code(s) => write!(self.writer, "<code>{}</code>", escape(s))?,
            }
        }
        Ok(())
    }

    /// Consume the renderer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Render blocks to an owned HTML string.
pub fn render_to_string(blocks: &[Block]) -> String {
    let mut renderer = HtmlRenderer::new(Vec::new());
    // Writing to a Vec<u8> cannot fail, and the output is pure ASCII markup
    // around escaped UTF-8 text.
    renderer
        .render_all(blocks)
        .expect("write to Vec<u8> cannot fail");
    String::from_utf8(renderer.into_inner()).expect("rendered HTML is valid UTF-8")
}

// =============================================================================
// Tests
// =============================================================================
