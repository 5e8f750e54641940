//! Carousel extraction.
//!
//! Syntax: `<carousel>path|alt|caption; path|alt</carousel>`. The body may span
//! several lines; the first closing tag ends the block.

use std::sync::LazyLock;

use regex::Regex;

use crate::marker::MarkerKind;
use crate::media::{Carousel, CarouselImage};
use crate::scanner::{
    Extraction, OffsetMap, RegexScanner, TagMatch, TagScanner, is_in_code_block, splice,
};
use crate::util::absolutize;

/// Matches a carousel block, capturing its body.
static CAROUSEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<carousel>(.*?)</carousel>").unwrap());

/// Extract all carousels from `source`.
///
/// Each block is replaced with a `<!--CAROUSEL_n-->` placeholder, where `n` is
/// the carousel's index in the returned (ascending) list. Positions are byte
/// offsets into `source`.
///
/// With `skip_code_blocks`, blocks starting inside a fenced or indented code
/// block are left alone, as the audio pass does for audio tags.
#[must_use]
pub fn extract_carousels(source: &str, skip_code_blocks: bool) -> Extraction<Carousel> {
    extract_carousels_with(&RegexScanner::new(&CAROUSEL_RE), source, skip_code_blocks)
}

/// Extract carousels using a custom scanner.
///
/// The scanner must capture the block body as its first group.
#[must_use]
pub(crate) fn extract_carousels_with<S: TagScanner>(
    scanner: &S,
    source: &str,
    skip_code_blocks: bool,
) -> Extraction<Carousel> {
    let matches: Vec<TagMatch<'_>> = scanner
        .scan(source)
        .filter(|m| !(skip_code_blocks && is_in_code_block(source, m.start)))
        .collect();

    let total = matches.len();
    let mut text = source.to_owned();
    let mut items = Vec::with_capacity(total);
    let mut offsets = OffsetMap::new();

    for (counter, m) in matches.iter().rev().enumerate() {
        let index = total - 1 - counter;
        let placeholder = MarkerKind::Carousel.placeholder(index);

        text = splice(&text, m.start, m.end, &placeholder);
        offsets.record(m.start, m.end - m.start, placeholder.len());
        items.push(Carousel {
            images: parse_carousel_entries(m.group(0).unwrap_or_default()),
            position: m.start,
        });
    }

    items.reverse();

    Extraction {
        text,
        items,
        offsets,
    }
}

/// Parse the body of a carousel block into images.
///
/// Entries are separated by `;`, fields by `|`. Surrounding whitespace is
/// trimmed, empty entries are dropped, and an empty caption is `None`.
///
/// ```
/// use folio_renderer::parse_carousel_entries;
///
/// let images = parse_carousel_entries("a.png|Alt A|Cap A; ../images/b.png|Alt B;");
/// assert_eq!(images.len(), 2);
/// assert_eq!(images[0].source, "/images/a.png");
/// assert_eq!(images[1].source, "/images/b.png");
/// assert_eq!(images[1].caption, None);
/// ```
#[must_use]
pub fn parse_carousel_entries(body: &str) -> Vec<CarouselImage> {
    body.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut fields = entry.splitn(3, '|').map(str::trim);
            let source = fields.next().unwrap_or_default();
            let alt = fields.next().unwrap_or_default();
            let caption = fields.next().filter(|c| !c.is_empty());

            CarouselImage {
                source: absolutize(source, "images"),
                alt: alt.to_owned(),
                caption: caption.map(str::to_owned),
            }
        })
        .collect()
}
