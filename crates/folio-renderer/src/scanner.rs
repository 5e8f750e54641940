//! Position-preserving tag scanning and splicing.
//!
//! The extraction passes never mutate a buffer in place. They collect all
//! matches against one buffer up front, then fold over them in descending
//! offset order, building a new buffer with [`splice`] at each step. Because
//! every splice happens at or after the offsets still waiting to be processed,
//! those offsets stay valid without any bookkeeping.
//!
//! [`OffsetMap`] records the splices so that positions found in a rewritten
//! buffer can be translated back to the original document.

use regex::{Captures, Regex};

/// A tag found by a [`TagScanner`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagMatch<'t> {
    /// Full matched text.
    pub text: &'t str,
    /// Capture groups (without the whole-match group).
    pub groups: Vec<Option<&'t str>>,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
}

impl<'t> TagMatch<'t> {
    /// Get capture group `index` (0-based, whole match excluded).
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.groups.get(index).copied().flatten()
    }

    fn from_captures(caps: &Captures<'t>) -> Self {
        let whole = caps.get_match();
        Self {
            text: whole.as_str(),
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()))
                .collect(),
            start: whole.start(),
            end: whole.end(),
        }
    }
}

/// Finds custom tags in a text.
///
/// Calling [`scan`](Self::scan) again on the same text restarts from the
/// beginning.
pub trait TagScanner {
    /// Lazily yield every match in `text`, in ascending offset order.
    fn scan<'t>(&self, text: &'t str) -> impl Iterator<Item = TagMatch<'t>>;
}

/// [`TagScanner`] backed by a compiled regular expression.
#[derive(Clone, Copy, Debug)]
pub struct RegexScanner {
    regex: &'static Regex,
}

impl RegexScanner {
    /// Create a scanner over a process-wide regex.
    #[must_use]
    pub fn new(regex: &'static Regex) -> Self {
        Self { regex }
    }
}

impl TagScanner for RegexScanner {
    fn scan<'t>(&self, text: &'t str) -> impl Iterator<Item = TagMatch<'t>> {
        self.regex
            .captures_iter(text)
            .map(|caps| TagMatch::from_captures(&caps))
    }
}

/// Output of an extraction pass.
#[derive(Clone, Debug, Default)]
pub struct Extraction<T> {
    /// Buffer with every extracted tag replaced by its placeholder.
    pub text: String,
    /// Extracted records in ascending document order.
    pub items: Vec<T>,
    /// Splices applied to produce `text` from the pass input.
    pub offsets: OffsetMap,
}

/// Replace `buffer[start..end]` with `replacement`, returning a new buffer.
///
/// # Panics
///
/// Panics if `start..end` is not a valid char-boundary range of `buffer`.
#[must_use]
pub fn splice(buffer: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(buffer.len() - (end - start) + replacement.len());
    out.push_str(&buffer[..start]);
    out.push_str(replacement);
    out.push_str(&buffer[end..]);
    out
}

/// Check whether `pos` in `buffer` lies inside a fenced or indented code block.
///
/// Only the text before `pos` is inspected:
/// - fenced: an odd number of ```` ``` ```` markers precede `pos`;
/// - indented: the line containing `pos` starts with four spaces before it.
#[must_use]
pub fn is_in_code_block(buffer: &str, pos: usize) -> bool {
    let before = &buffer[..pos];

    if before.matches("```").count() % 2 == 1 {
        return true;
    }

    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    before[line_start..].starts_with("    ")
}

/// A splice recorded in original-document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Edit {
    start: usize,
    removed: usize,
    inserted: usize,
}

/// Maps positions in a spliced buffer back to the original document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffsetMap {
    /// Kept sorted by `start`.
    edits: Vec<Edit>,
}

impl OffsetMap {
    /// Create an empty map (identity).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `removed` bytes at original offset `start` were replaced
    /// by `inserted` bytes.
    ///
    /// Edits must not overlap.
    pub fn record(&mut self, start: usize, removed: usize, inserted: usize) {
        let edit = Edit {
            start,
            removed,
            inserted,
        };
        let idx = self.edits.partition_point(|e| e.start < start);
        self.edits.insert(idx, edit);
    }

    /// Check whether no splices have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Translate a position in the spliced buffer to the original document.
    ///
    /// A position inside inserted text maps to the start of the replaced span.
    #[must_use]
    pub fn to_original(&self, pos: usize) -> usize {
        let mut removed = 0;
        let mut inserted = 0;

        for edit in &self.edits {
            // Start of this edit in spliced coordinates.
            let spliced_start = edit.start + inserted - removed;
            if pos < spliced_start {
                break;
            }
            if pos < spliced_start + edit.inserted {
                return edit.start;
            }
            removed += edit.removed;
            inserted += edit.inserted;
        }

        pos + removed - inserted
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use pretty_assertions::assert_eq;

    use super::*;

    static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\w+)\]").unwrap());

    #[test]
    fn test_regex_scanner_yields_groups_and_spans() {
        let scanner = RegexScanner::new(&WORD_RE);
        let matches: Vec<_> = scanner.scan("a [one] b [two]").collect();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "[one]");
        assert_eq!(matches[0].group(0), Some("one"));
        assert_eq!((matches[0].start, matches[0].end), (2, 7));
        assert_eq!(matches[1].group(0), Some("two"));
        assert_eq!(matches[1].start, 10);
    }

    #[test]
    fn test_regex_scanner_is_restartable() {
        let scanner = RegexScanner::new(&WORD_RE);
        let text = "[x] [y]";

        let first: Vec<_> = scanner.scan(text).collect();
        let second: Vec<_> = scanner.scan(text).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_group_out_of_range() {
        let scanner = RegexScanner::new(&WORD_RE);
        let m = scanner.scan("[x]").next().unwrap();
        assert_eq!(m.group(5), None);
    }

    #[test]
    fn test_splice_middle() {
        assert_eq!(splice("hello world", 6, 11, "there"), "hello there");
    }

    #[test]
    fn test_splice_insert_only() {
        assert_eq!(splice("ab", 1, 1, "-"), "a-b");
    }

    #[test]
    fn test_splice_whole() {
        assert_eq!(splice("abc", 0, 3, ""), "");
    }

    #[test]
    fn test_code_block_plain_text() {
        let text = "Some text <x>";
        assert!(!is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_inside_open_fence() {
        let text = "```\n<x>\n```";
        assert!(is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_after_closed_fence() {
        let text = "```\ncode\n```\n\n<x>";
        assert!(!is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_fence_with_language() {
        let text = "```html\n<x>\n```";
        assert!(is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_indented() {
        let text = "Paragraph\n\n    <x>";
        assert!(is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_indented_after_content_on_line() {
        let text = "    code <x>";
        assert!(is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_three_spaces_not_indented() {
        let text = "   <x>";
        assert!(!is_in_code_block(text, text.find("<x>").unwrap()));
    }

    #[test]
    fn test_code_block_first_line_indented() {
        assert!(is_in_code_block("    <x>", 4));
        assert!(!is_in_code_block("<x>", 0));
    }

    #[test]
    fn test_offset_map_identity() {
        let map = OffsetMap::new();
        assert!(map.is_empty());
        assert_eq!(map.to_original(42), 42);
    }

    #[test]
    fn test_offset_map_before_edit_unchanged() {
        let mut map = OffsetMap::new();
        map.record(10, 5, 20);
        assert_eq!(map.to_original(3), 3);
        assert_eq!(map.to_original(9), 9);
    }

    #[test]
    fn test_offset_map_after_growing_edit() {
        let mut map = OffsetMap::new();
        // original[10..15] replaced by 20 bytes
        map.record(10, 5, 20);
        assert_eq!(map.to_original(30), 15);
        assert_eq!(map.to_original(35), 20);
    }

    #[test]
    fn test_offset_map_after_shrinking_edit() {
        let mut map = OffsetMap::new();
        map.record(0, 30, 4);
        assert_eq!(map.to_original(4), 30);
        assert_eq!(map.to_original(10), 36);
    }

    #[test]
    fn test_offset_map_inside_inserted_text() {
        let mut map = OffsetMap::new();
        map.record(10, 5, 20);
        assert_eq!(map.to_original(12), 10);
        assert_eq!(map.to_original(29), 10);
    }

    #[test]
    fn test_offset_map_edits_recorded_in_descending_order() {
        let original = "aa[X]bb[YY]cc";
        let mut buffer = original.to_owned();
        let mut map = OffsetMap::new();

        // Splice right to left, as the extraction passes do.
        for (start, end, replacement) in [(7, 11, "<second>"), (2, 5, "<first>")] {
            buffer = splice(&buffer, start, end, replacement);
            map.record(start, end - start, replacement.len());
        }

        assert_eq!(buffer, "aa<first>bb<second>cc");
        let cc = buffer.find("cc").unwrap();
        assert_eq!(map.to_original(cc), original.find("cc").unwrap());
        let bb = buffer.find("bb").unwrap();
        assert_eq!(map.to_original(bb), original.find("bb").unwrap());
    }
}
