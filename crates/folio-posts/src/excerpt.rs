//! Plain-text excerpts for post listings.

use std::sync::LazyLock;

use regex::Regex;

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 160;

/// Markdown syntax to strip, applied in order, with the replacement for each
/// match.
static STRIP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Fenced blocks go first so their contents never leak into the text.
        (r"```[\s\S]*?```", ""),
        (r"!\[[^\]]*\]\([^)]*\)", ""),
        (r"\[([^\]]*)\]\([^)]*\)", "$1"),
        (r"(?m)^#{1,6}\s+", ""),
        (r"(?m)^>\s+", ""),
        (r"\*\*(.*?)\*\*", "$1"),
        (r"__(.*?)__", "$1"),
        (r"\*(.*?)\*", "$1"),
        (r"_(.*?)_", "$1"),
        (r"`([^`]*)`", "$1"),
        (r"(?m)^[-*]{3,}\s*$", ""),
        (r"<[^>]*>", ""),
        (r":[a-z_]+:", ""),
        (r"\s+", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Extract a plain-text excerpt of at most `max_len` characters from markdown.
///
/// Markdown syntax, HTML tags and emoji shortcodes are stripped and whitespace
/// is collapsed. Longer text is cut at the last sentence end in the second
/// half of the limit, or else at the last space with `...` appended.
///
/// ```
/// use folio_posts::extract_excerpt;
///
/// let excerpt = extract_excerpt("# Hello\n\nSome **bold** [link](https://x.com).", 160);
/// assert_eq!(excerpt, "Hello Some bold link.");
/// ```
#[must_use]
pub fn extract_excerpt(markdown: &str, max_len: usize) -> String {
    let mut text = markdown.to_owned();
    for (regex, replacement) in STRIP_RULES.iter() {
        if regex.is_match(&text) {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
    }
    let text = text.trim();

    let Some((cut_at, _)) = text.char_indices().nth(max_len) else {
        return text.to_owned();
    };
    let cutoff = &text[..cut_at];

    let last_sentence = [". ", "? ", "! "]
        .iter()
        .filter_map(|end| cutoff.rfind(end))
        .max();
    if let Some(end) = last_sentence
        && cutoff[..end].chars().count() * 2 > max_len
    {
        return text[..=end].to_owned();
    }

    match cutoff.rfind(' ') {
        Some(space) if space > 0 => format!("{}...", &text[..space]),
        _ => format!("{cutoff}..."),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(extract_excerpt("Hello world.", 160), "Hello world.");
    }

    #[test]
    fn test_empty() {
        assert_eq!(extract_excerpt("", 160), "");
    }

    #[test]
    fn test_strips_images_and_links() {
        assert_eq!(
            extract_excerpt("![cover](a.png) Read [the docs](https://x.com) now", 160),
            "Read the docs now"
        );
    }

    #[test]
    fn test_strips_headings_quotes_and_emphasis() {
        let markdown = "## Title\n\n> Quoted *text* and __more__\n\n`code` here";
        assert_eq!(
            extract_excerpt(markdown, 160),
            "Title Quoted text and more code here"
        );
    }

    #[test]
    fn test_strips_fenced_code_and_rules() {
        let markdown = "Before\n\n```rust\nlet x = 1;\n```\n\n---\n\nAfter";
        assert_eq!(extract_excerpt(markdown, 160), "Before After");
    }

    #[test]
    fn test_strips_html_media_and_emoji() {
        let markdown = "<audio src=\"a.mp3\"></audio>\n\nGood :smile: day";
        assert_eq!(extract_excerpt(markdown, 160), "Good day");
    }

    #[test]
    fn test_cuts_at_sentence_end_past_half() {
        let markdown = "First sentence is here. Second one is long enough to pass the limit.";
        // "First sentence is here." is 23 chars, past half of 40.
        assert_eq!(extract_excerpt(markdown, 40), "First sentence is here.");
    }

    #[test]
    fn test_cuts_at_word_when_sentence_too_early() {
        let markdown = "Hi. This text keeps going well beyond the configured limit";
        assert_eq!(extract_excerpt(markdown, 30), "Hi. This text keeps going...");
    }

    #[test]
    fn test_cuts_single_long_word() {
        assert_eq!(extract_excerpt("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let markdown = "héllo wörld ünïcode";
        assert_eq!(extract_excerpt(markdown, 13), "héllo wörld...");
    }

    #[test]
    fn test_exact_length_not_cut() {
        assert_eq!(extract_excerpt("abcd", 4), "abcd");
    }
}
