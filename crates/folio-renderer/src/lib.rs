//! Markdown renderer with embedded audio and carousel extraction.
//!
//! Blog posts are plain markdown with two custom tags:
//!
//! - `<audio src="../audio/track.mp3" data-title="Intro"></audio>`
//! - `<carousel>a.png|Alt A|Caption A; b.png|Alt B</carousel>`
//!
//! [`MediaRenderer`] pulls those tags out of the document, renders the rest with
//! pulldown-cmark and leaves an invisible, indexed marker element where each
//! tag used to be. A UI layer mounts the real widget on the marker, using the
//! extracted [`AudioTag`] / [`Carousel`] at the same index.
//!
//! # Architecture
//!
//! Rendering is three passes over a working copy of the input:
//!
//! 1. **Carousel extraction**: every `<carousel>` block is replaced with a
//!    `<!--CAROUSEL_n-->` comment placeholder.
//! 2. **Audio extraction**: every `<audio>` tag outside a code block is
//!    replaced with an `<!--AUDIO_n-->` placeholder.
//! 3. **Rendering**: pulldown-cmark renders the buffer; placeholders survive as
//!    raw HTML blocks and are then rewritten into marker elements.
//!
//! Matches are spliced in descending offset order so that no splice moves an
//! offset that is still waiting to be processed.
//!
//! # Example
//!
//! ```
//! use folio_renderer::MediaRenderer;
//!
//! let markdown = "<audio src=\"../audio/x.mp3\" data-title=\"Intro\"></audio>\n\nHello";
//! let output = MediaRenderer::new().render(markdown);
//!
//! assert_eq!(output.audio_tags[0].source, "/audio/x.mp3");
//! assert_eq!(output.audio_tags[0].position, 0);
//! assert!(output.html.contains(r#"data-audio-marker="0""#));
//! assert!(output.html.contains("<p>Hello</p>"));
//! ```

mod audio;
mod carousel;
mod markdown;
mod marker;
mod media;
mod renderer;
mod replacements;
pub mod scanner;
mod util;

pub use audio::extract_audio;
pub use carousel::{extract_carousels, parse_carousel_entries};
pub use marker::MarkerKind;
pub use media::{AudioTag, Carousel, CarouselImage, RenderOutput};
pub use renderer::{MediaRenderer, RenderOptions, render};
pub use replacements::Replacements;
pub use scanner::{Extraction, OffsetMap, TagMatch, TagScanner};
pub use util::absolutize;
