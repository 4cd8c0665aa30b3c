//! Property-based tests for linemark.
//!
//! These tests use proptest to generate random inputs and verify the
//! classifier and renderer are total: any input classifies without
//! panicking, and the line-accounting invariant holds.

use proptest::prelude::*;

use linemark_core::Block;
use linemark_parser::{classify, format_inline};
use linemark_render::render_to_string;

/// Generate a random markup-like string.
fn markup_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate a random line of text.
fn text_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E]{0,200}").unwrap()
}

/// Generate a line with no block or inline markers.
fn plain_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[0-9A-Za-z ]{1,80}").unwrap()
}

/// Generate a non-blank list item (a whitespace-only item would trim down
/// to a bare `-` and classify as a paragraph).
fn list_item() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[0-9A-Za-z][0-9A-Za-z ]{0,79}").unwrap()
}

/// Generate a bullet list.
fn list() -> impl Strategy<Value = String> {
    prop::collection::vec(list_item(), 1..10).prop_map(|items| {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    /// The classifier should never panic on any input.
    #[test]
    fn classifier_never_panics(input in markup_string()) {
        let _ = classify(&input);
    }

    /// The inline formatter should never panic on any line.
    #[test]
    fn formatter_never_panics(line in text_line()) {
        let _ = format_inline(&line);
    }

    /// Rendering classified blocks should never panic.
    #[test]
    fn renderer_never_panics(input in markup_string()) {
        let _ = render_to_string(&classify(&input));
    }

    /// Every non-blank line contributes to exactly one block.
    #[test]
    fn nonblank_lines_are_accounted_for(input in markup_string()) {
        let nonblank = input.split('\n').filter(|l| !l.trim().is_empty()).count();
        let contributed: usize = classify(&input).iter().map(|b| b.line_count()).sum();
        prop_assert_eq!(contributed, nonblank);
    }

    /// Marker-free non-blank lines each become one paragraph, in order.
    #[test]
    fn plain_lines_become_paragraphs(lines in prop::collection::vec(plain_line(), 0..20)) {
        let lines: Vec<String> =
            lines.into_iter().filter(|l| !l.trim().is_empty()).collect();
        let input = lines.join("\n");
        let blocks = classify(&input);

        prop_assert_eq!(blocks.len(), lines.len());
        for (block, line) in blocks.iter().zip(&lines) {
            match block {
                Block::Paragraph(spans) => {
                    let flat: String =
                        spans.iter().map(|s| s.text()).collect();
                    prop_assert_eq!(&flat, line.trim());
                }
                other => {
                    prop_assert!(false, "expected paragraph, got {:?}", other);
                }
            }
        }
    }

    /// A contiguous run of list lines yields a single list group.
    #[test]
    fn list_runs_group(input in list()) {
        let items = input.split('\n').count();
        let blocks = classify(&input);

        prop_assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::List(got) => {
                prop_assert_eq!(got.len(), items);
            }
            other => {
                prop_assert!(false, "expected list, got {:?}", other);
            }
        }
    }

    /// Classifying blank-separated groups together equals classifying them
    /// separately and concatenating.
    #[test]
    fn blank_separated_groups_are_independent(a in markup_string(), b in markup_string()) {
        let joined = classify(&format!("{}\n\n{}", a, b));

        let mut separate = classify(&a);
        separate.extend(classify(&b));

        prop_assert_eq!(joined, separate);
    }
}
