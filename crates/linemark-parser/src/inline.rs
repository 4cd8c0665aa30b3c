//! Inline span formatter.
//!
//! Resolves emphasis and code spans inside a line's text. Patterns are
//! applied in a fixed precedence order; each pass only sees text left
//! unformatted by the earlier passes, so spans never nest or overlap.
//! Unpaired markers stay literal.

use linemark_core::InlineSpan;
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Triple-marker span: ***bold italic***
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap());

/// Double-marker span: **bold**
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Single-marker span: *italic*
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Backtick span: `code`
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

// =============================================================================
// Formatter
// =============================================================================

/// Format a line's raw text into inline spans.
///
/// Passes run in precedence order: triple marker, double marker, single
/// marker, backtick. Each pattern is non-greedy and matches the shortest
/// span between paired markers.
///
/// # Example
///
/// ```
/// use linemark_parser::format_inline;
/// use linemark_core::InlineSpan;
///
/// let spans = format_inline("a **b** c");
/// assert_eq!(spans, vec![
///     InlineSpan::Text("a ".to_string()),
///     InlineSpan::Bold("b".to_string()),
///     InlineSpan::Text(" c".to_string()),
/// ]);
/// ```
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    let passes: [(&Regex, fn(String) -> InlineSpan); 4] = [
        (&BOLD_ITALIC_RE, InlineSpan::BoldItalic),
        (&BOLD_RE, InlineSpan::Bold),
        (&ITALIC_RE, InlineSpan::Italic),
        (&CODE_RE, InlineSpan::Code),
    ];

    let mut spans = vec![InlineSpan::Text(text.to_string())];
    for (pattern, make) in passes {
        spans = apply_pass(spans, pattern, make);
    }
    spans
}

/// Apply one pattern pass over the still-unformatted text segments.
///
/// Formatted spans from earlier passes are carried through untouched.
fn apply_pass(
    spans: Vec<InlineSpan>,
    pattern: &Regex,
    make: fn(String) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
            let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");

            if whole.0 > last {
                out.push(InlineSpan::Text(text[last..whole.0].to_string()));
            }
            out.push(make(inner.to_string()));
            last = whole.1;
        }

        if last < text.len() {
            out.push(InlineSpan::Text(text[last..].to_string()));
        }
    }

    out
}

// =============================================================================
// Tests
// =============================================================================
