//! Payload extraction.
//!
//! The payload is whatever follows the last consumed option. It may contain
//! triple-backtick blocks; when it does, only the blocks and the text between
//! them make up the payload, one segment per line.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// SAFETY: compile-time constant, exercised by tests.
static BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)`{3}(.*?)`{3}").expect("static regex must compile"));

/// A triple-backtick block inside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock<'a> {
    /// Text between the markers.
    pub content: &'a str,
    /// Offset of the opening marker.
    pub start: usize,
    /// Offset just past the closing marker.
    pub end: usize,
}

/// Finds all blocks in `raw`, each closed by its nearest following marker.
pub fn find_blocks(raw: &str) -> Vec<TextBlock<'_>> {
    BLOCK_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let content = caps.get(1)?;
            Some(TextBlock {
                content: content.as_str(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Extracts the payload from `rest` given the scanner's final `cursor`.
///
/// The character at `cursor` separates the options from the payload and is
/// skipped. Without blocks the remainder is returned verbatim. With blocks,
/// the segments are joined with `\n`:
///
/// - non-blank text before a block, trimmed, as its own segment;
/// - each block's content, minus a leading literal `n`.
///
/// Text after the last block is dropped. If the joined result is empty the
/// unprocessed remainder is returned instead.
///
/// # Examples
///
/// ```
/// use cowbot_core::extract_text;
///
/// assert_eq!(extract_text(" hello there", 0), "hello there");
/// assert_eq!(extract_text(" -b", 3), "");
/// assert_eq!(
///     extract_text(" ```first``` middle ```second```", 0),
///     "first\nmiddle\nsecond"
/// );
/// ```
pub fn extract_text(rest: &str, cursor: usize) -> String {
    let Some(tail) = rest.get(cursor..) else {
        return String::new();
    };
    let mut chars = tail.chars();
    if chars.next().is_none() {
        return String::new();
    }
    let raw = chars.as_str();

    let blocks = find_blocks(raw);
    if blocks.is_empty() {
        return raw.to_string();
    }
    debug!(blocks = blocks.len(), "Extracting text from blocks");

    let text = join_blocks(raw, &blocks);
    if text.is_empty() {
        raw.to_string()
    } else {
        text
    }
}

fn join_blocks(raw: &str, blocks: &[TextBlock<'_>]) -> String {
    let mut segments: Vec<&str> = Vec::with_capacity(blocks.len() * 2);
    let mut last_end = 0;

    for block in blocks {
        let gap = raw[last_end..block.start].trim();
        if !gap.is_empty() {
            segments.push(gap);
        }
        // A literal leading `n` is dropped, not a newline.
        segments.push(block.content.strip_prefix('n').unwrap_or(block.content));
        last_end = block.end;
    }

    segments.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_payload_is_empty() {
        assert_eq!(extract_text("", 0), "");
        assert_eq!(extract_text(" ", 0), "");
        assert_eq!(extract_text(" -W 40", 6), "");
    }

    #[test]
    fn test_cursor_past_end_is_empty() {
        assert_eq!(extract_text(" hi", 10), "");
    }

    #[test]
    fn test_plain_payload_keeps_whitespace() {
        assert_eq!(extract_text("  padded  ", 0), " padded  ");
        assert_eq!(extract_text(" a\nb", 0), "a\nb");
    }

    #[test]
    fn test_separator_may_be_any_character() {
        assert_eq!(extract_text("xhello", 0), "hello");
        assert_eq!(extract_text(" é rest", 1), " rest");
    }

    #[test]
    fn test_single_block_at_start() {
        let text = extract_text(" ```\nfn main() {}\n```", 0);
        assert_eq!(text, "\nfn main() {}\n");
    }

    #[test]
    fn test_leading_text_before_first_block() {
        assert_eq!(extract_text(" look: ```code```", 0), "look:\ncode");
    }

    #[test]
    fn test_blank_gap_between_blocks() {
        assert_eq!(extract_text(" ```a``` ```b```", 0), "a\nb");
    }

    #[test]
    fn test_text_after_last_block_is_dropped() {
        assert_eq!(extract_text(" ```a``` trailing", 0), "a");
    }

    #[test]
    fn test_non_greedy_blocks() {
        let blocks = find_blocks("```one``` and ```two```");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "one");
        assert_eq!((blocks[0].start, blocks[0].end), (0, 9));
        assert_eq!(blocks[1].content, "two");
    }

    #[test]
    fn test_leading_literal_n_is_stripped() {
        assert_eq!(extract_text(" ```nice```", 0), "ice");
        assert_eq!(extract_text(" ```\nnice```", 0), "\nnice");
    }

    #[test]
    fn test_empty_blocks_fall_back_to_raw() {
        assert_eq!(extract_text(" ``````", 0), "``````");
        assert_eq!(extract_text(" ```n```", 0), "```n```");
    }

    #[test]
    fn test_unclosed_marker_is_plain_text() {
        assert_eq!(extract_text(" ```open", 0), "```open");
    }
}
