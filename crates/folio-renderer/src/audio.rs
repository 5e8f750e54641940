//! Audio tag extraction.
//!
//! Syntax: `<audio src="../audio/x.mp3" data-title="Intro"></audio>`, with
//! attributes in any order. Only `src`, `data-title` and `data-description`
//! are read; a tag without `src` is left as literal text.
//!
//! Tags inside fenced or indented code blocks are examples, not players, and
//! are never extracted.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::marker::MarkerKind;
use crate::media::AudioTag;
use crate::scanner::{
    Extraction, OffsetMap, RegexScanner, TagMatch, TagScanner, is_in_code_block, splice,
};
use crate::util::absolutize;

/// Matches an empty `<audio ...></audio>` element, capturing its attributes.
///
/// Quoted values may contain `>`.
static AUDIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<audio\b((?:[^>"]|"[^"]*")*)>\s*</audio>"#).unwrap());

/// Matches a double-quoted `name="value"` attribute.
static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*"([^"]*)""#).unwrap());

/// Extract audio tags from `buffer`.
///
/// `buffer` is the output of the carousel pass and `offsets` its splice
/// record; reported positions are translated through `offsets` so they point
/// into the original document. Pass an empty [`OffsetMap`] when `buffer` is
/// the original document.
///
/// Each accepted tag is replaced with an `<!--AUDIO_n-->` placeholder, where
/// `n` is its index in the returned (ascending) list.
#[must_use]
pub fn extract_audio(buffer: &str, offsets: &OffsetMap) -> Extraction<AudioTag> {
    extract_audio_with(&RegexScanner::new(&AUDIO_RE), buffer, offsets)
}

/// Extract audio tags using a custom scanner.
///
/// The scanner must capture the tag's attribute list as its first group.
#[must_use]
pub(crate) fn extract_audio_with<S: TagScanner>(
    scanner: &S,
    buffer: &str,
    offsets: &OffsetMap,
) -> Extraction<AudioTag> {
    let accepted: Vec<(TagMatch<'_>, HashMap<String, &str>)> = scanner
        .scan(buffer)
        .filter(|m| !is_in_code_block(buffer, m.start))
        .filter_map(|m| {
            let attrs = parse_attributes(m.group(0).unwrap_or_default());
            attrs
                .get("src")
                .is_some_and(|src| !src.is_empty())
                .then_some((m, attrs))
        })
        .collect();

    let total = accepted.len();
    let mut text = buffer.to_owned();
    let mut items = Vec::with_capacity(total);
    let mut spliced = OffsetMap::new();

    for (counter, (m, attrs)) in accepted.iter().rev().enumerate() {
        let index = total - 1 - counter;
        let placeholder = MarkerKind::Audio.placeholder(index);

        text = splice(&text, m.start, m.end, &placeholder);
        spliced.record(m.start, m.end - m.start, placeholder.len());
        items.push(audio_tag(attrs, index, offsets.to_original(m.start)));
    }

    items.reverse();

    Extraction {
        text,
        items,
        offsets: spliced,
    }
}

/// Build an [`AudioTag`] from parsed attributes.
///
/// `index` is the tag's position among accepted tags; an empty or missing
/// title becomes `Track {index + 1}`.
fn audio_tag(attrs: &HashMap<String, &str>, index: usize, position: usize) -> AudioTag {
    let title = match attrs.get("data-title") {
        Some(title) if !title.is_empty() => (*title).to_owned(),
        _ => format!("Track {}", index + 1),
    };

    AudioTag {
        source: absolutize(attrs.get("src").copied().unwrap_or_default(), "audio"),
        title,
        description: attrs
            .get("data-description")
            .filter(|d| !d.is_empty())
            .map(|d| (*d).to_owned()),
        position,
    }
}

/// Parse `name="value"` pairs. Names are ASCII case-insensitive and stored
/// lowercased; later duplicates are ignored.
fn parse_attributes(attrs: &str) -> HashMap<String, &str> {
    let mut map = HashMap::new();
    for caps in ATTR_RE.captures_iter(attrs) {
        let (_, [name, value]) = caps.extract();
        map.entry(name.to_ascii_lowercase()).or_insert(value);
    }
    map
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn extract(buffer: &str) -> Extraction<AudioTag> {
        extract_audio(buffer, &OffsetMap::new())
    }

    #[test]
    fn test_parse_attributes_any_order() {
        let attrs = parse_attributes(r#" data-title="T" controls src="x.mp3""#);
        assert_eq!(attrs.get("src"), Some(&"x.mp3"));
        assert_eq!(attrs.get("data-title"), Some(&"T"));
        assert_eq!(attrs.get("controls"), None);
    }

    #[test]
    fn test_parse_attributes_first_duplicate_wins() {
        let attrs = parse_attributes(r#"src="a.mp3" src="b.mp3""#);
        assert_eq!(attrs.get("src"), Some(&"a.mp3"));
    }

    #[test]
    fn test_parse_attributes_case_insensitive_names() {
        let attrs = parse_attributes(r#"SRC="x.mp3" Data-Title="Loud""#);
        assert_eq!(attrs.get("src"), Some(&"x.mp3"));
        assert_eq!(attrs.get("data-title"), Some(&"Loud"));
    }

    #[test]
    fn test_extract_uppercase_attributes() {
        let source = r#"<audio SRC="../audio/x.mp3" Data-Title="Intro"></audio>"#;
        let extraction = extract(source);

        assert_eq!(extraction.items.len(), 1);
        assert_eq!(extraction.items[0].source, "/audio/x.mp3");
        assert_eq!(extraction.items[0].title, "Intro");
    }

    #[test]
    fn test_extract_title_containing_angle_bracket() {
        let source = "<audio src=\"../audio/a.mp3\" data-title=\"Rock > Pop\"></audio>\n\nHi";
        let extraction = extract(source);

        assert_eq!(extraction.items.len(), 1);
        assert_eq!(extraction.items[0].title, "Rock > Pop");
        assert_eq!(extraction.items[0].source, "/audio/a.mp3");
        assert_eq!(extraction.text, "\n\n<!--AUDIO_0-->\n\n\n\nHi");
    }

    #[test]
    fn test_extract_basic_tag() {
        let source = "<audio src=\"../audio/x.mp3\" data-title=\"Intro\"></audio>\n\nHello";
        let extraction = extract(source);

        assert_eq!(
            extraction.items,
            vec![AudioTag {
                source: "/audio/x.mp3".to_owned(),
                title: "Intro".to_owned(),
                description: None,
                position: 0,
            }]
        );
        assert_eq!(extraction.text, "\n\n<!--AUDIO_0-->\n\n\n\nHello");
    }

    #[test]
    fn test_extract_attribute_order_flexible() {
        let source = r#"<audio data-title="Outro" controls src="../audio/y.mp3"></audio>"#;
        let extraction = extract(source);

        assert_eq!(extraction.items[0].source, "/audio/y.mp3");
        assert_eq!(extraction.items[0].title, "Outro");
    }

    #[test]
    fn test_extract_description() {
        let source = r#"<audio src="a.mp3" data-title="A" data-description="Live take"></audio>"#;
        let extraction = extract(source);
        assert_eq!(extraction.items[0].description.as_deref(), Some("Live take"));
    }

    #[test]
    fn test_missing_src_passes_through() {
        let source = r#"<audio data-title="No source"></audio>"#;
        let extraction = extract(source);

        assert!(extraction.items.is_empty());
        assert_eq!(extraction.text, source);
    }

    #[test]
    fn test_empty_src_passes_through() {
        let source = r#"<audio src="" data-title="Empty"></audio>"#;
        assert!(extract(source).items.is_empty());
    }

    #[test]
    fn test_unterminated_tag_passes_through() {
        let source = r#"<audio src="a.mp3" data-title="A">"#;
        let extraction = extract(source);

        assert!(extraction.items.is_empty());
        assert_eq!(extraction.text, source);
    }

    #[test]
    fn test_default_titles_count_accepted_tags_only() {
        let source = concat!(
            "```\n",
            "<audio src=\"skip.mp3\" data-title=\"\"></audio>\n",
            "```\n\n",
            "<audio src=\"a.mp3\" data-title=\"\"></audio>\n\n",
            "<audio src=\"b.mp3\"></audio>\n\n",
            "<audio src=\"c.mp3\" data-title=\"Named\"></audio>\n\n",
            "<audio src=\"d.mp3\" data-title=\"\"></audio>\n",
        );
        let extraction = extract(source);

        let titles: Vec<_> = extraction.items.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Track 1", "Track 2", "Named", "Track 4"]);
    }

    #[test]
    fn test_fenced_tag_skipped_and_left_verbatim() {
        let tag = r#"<audio src="x.mp3" data-title="Example"></audio>"#;
        let source = format!("```html\n{tag}\n```\n");
        let extraction = extract(&source);

        assert!(extraction.items.is_empty());
        assert_eq!(extraction.text, source);
    }

    #[test]
    fn test_indented_tag_skipped() {
        let source = "Example:\n\n    <audio src=\"x.mp3\" data-title=\"X\"></audio>\n";
        assert!(extract(source).items.is_empty());
    }

    #[test]
    fn test_tag_after_closed_fence_extracted() {
        let source = "```\ncode\n```\n\n<audio src=\"x.mp3\" data-title=\"X\"></audio>";
        let extraction = extract(source);

        assert_eq!(extraction.items.len(), 1);
        assert_eq!(extraction.items[0].position, source.find("<audio").unwrap());
    }

    #[test]
    fn test_multiple_tags_ascending_with_matching_placeholders() {
        let source = concat!(
            "<audio src=\"a.mp3\" data-title=\"A\"></audio>\n\n",
            "Middle\n\n",
            "<audio src=\"b.mp3\" data-title=\"B\"></audio>",
        );
        let extraction = extract(source);

        assert_eq!(extraction.items[0].title, "A");
        assert_eq!(extraction.items[1].title, "B");
        assert_eq!(extraction.items[0].position, 0);
        assert_eq!(extraction.items[1].position, source.rfind("<audio").unwrap());

        let a = extraction.text.find("<!--AUDIO_0-->").unwrap();
        let middle = extraction.text.find("Middle").unwrap();
        let b = extraction.text.find("<!--AUDIO_1-->").unwrap();
        assert!(a < middle && middle < b);
    }

    #[test]
    fn test_positions_translated_through_offsets() {
        // Pretend a 20-byte tag at offset 0 was replaced with 4 bytes.
        let mut offsets = OffsetMap::new();
        offsets.record(0, 20, 4);

        let buffer = "[c] <audio src=\"a.mp3\"></audio>";
        let extraction = extract_audio(buffer, &offsets);

        assert_eq!(extraction.items[0].position, 4 + 16);
    }

    #[test]
    fn test_whitespace_between_open_and_close() {
        let source = "<audio src=\"a.mp3\" data-title=\"A\">\n</audio>";
        assert_eq!(extract(source).items.len(), 1);
    }
}
