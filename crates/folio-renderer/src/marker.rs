//! Marker placeholders and their final HTML elements.

use crate::Replacements;

/// Kind of media a marker points at.
///
/// Audio and carousel markers are indexed independently, each from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Audio,
    Carousel,
}

impl MarkerKind {
    /// Sentinel name used in the placeholder comment.
    #[must_use]
    pub fn sentinel(self) -> &'static str {
        match self {
            Self::Audio => "AUDIO",
            Self::Carousel => "CAROUSEL",
        }
    }

    /// Attribute a UI layer queries to find the mount point.
    #[must_use]
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Audio => "data-audio-marker",
            Self::Carousel => "data-carousel-marker",
        }
    }

    /// Comment that stands in for the tag while markdown is rendered.
    #[must_use]
    pub fn comment(self, index: usize) -> String {
        format!("<!--{}_{index}-->", self.sentinel())
    }

    /// The comment as pulldown-cmark escapes it inside a code block.
    #[must_use]
    pub fn escaped_comment(self, index: usize) -> String {
        format!("&lt;!--{}_{index}--&gt;", self.sentinel())
    }

    /// Placeholder spliced into the markdown.
    ///
    /// Surrounding blank lines make pulldown-cmark treat the comment as its own
    /// HTML block instead of folding it into a paragraph or list item.
    #[must_use]
    pub fn placeholder(self, index: usize) -> String {
        format!("\n\n{}\n\n", self.comment(index))
    }

    /// Invisible element that replaces the comment in the rendered HTML.
    #[must_use]
    pub fn element(self, index: usize) -> String {
        format!(
            r#"<div {}="{index}" style="display:none;"></div>"#,
            self.attribute()
        )
    }
}

/// Rewrite every surviving placeholder comment into its marker element.
///
/// A placeholder spliced into a code block comes out of the markdown renderer
/// escaped; that form is rewritten too, so every extracted item has a marker.
pub(crate) fn reinject_markers(html: &mut String, audio_count: usize, carousel_count: usize) {
    let mut replacements = Replacements::with_capacity(2 * (audio_count + carousel_count));

    for (kind, count) in [
        (MarkerKind::Audio, audio_count),
        (MarkerKind::Carousel, carousel_count),
    ] {
        for index in 0..count {
            replacements.add(kind.comment(index), kind.element(index));
            replacements.add(kind.escaped_comment(index), kind.element(index));
        }
    }

    replacements.apply(html);
}
