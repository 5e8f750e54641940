//! Extracted media records and the render result.

/// An `<audio>` tag extracted from a post.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AudioTag {
    /// Site-absolute audio path (e.g. `/audio/intro.mp3`).
    pub source: String,
    /// Track title from `data-title`, or `Track N` when empty.
    pub title: String,
    /// Optional description from `data-description`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Byte offset of the tag in the original markdown.
    pub position: usize,
}

/// A single image of a carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CarouselImage {
    /// Site-absolute image path (e.g. `/images/a.png`).
    pub source: String,
    /// Alternative text.
    pub alt: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub caption: Option<String>,
}

/// A `<carousel>` block extracted from a post.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Carousel {
    /// Images in the order they were written.
    pub images: Vec<CarouselImage>,
    /// Byte offset of the `<carousel>` tag in the original markdown.
    pub position: usize,
}

/// Result of rendering a post.
///
/// Marker `n` in `html` refers to `audio_tags[n]` (`data-audio-marker`) or
/// `carousels[n]` (`data-carousel-marker`). Both lists are in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderOutput {
    /// Rendered HTML with marker elements.
    pub html: String,
    /// Extracted audio tags, ascending by position.
    pub audio_tags: Vec<AudioTag>,
    /// Extracted carousels, ascending by position.
    pub carousels: Vec<Carousel>,
}
