//! The media-aware markdown renderer.

use pulldown_cmark::Options;

use crate::audio::extract_audio;
use crate::carousel::extract_carousels;
use crate::markdown::render_markdown;
use crate::marker::reinject_markers;
use crate::media::RenderOutput;

/// Options for a render call.
///
/// Passed to each [`MediaRenderer`] explicitly; nothing is configured through
/// global state, so renderers with different options can run side by side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Render single newlines inside a paragraph as `<br />`.
    pub breaks: bool,
    /// Enable GitHub Flavored Markdown: tables, strikethrough, task lists and
    /// bare-URL autolinks.
    pub gfm: bool,
    /// Leave `<carousel>` blocks inside code blocks untouched.
    ///
    /// Off by default: only audio tags are code-block aware.
    pub skip_carousels_in_code: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            breaks: true,
            gfm: true,
            skip_carousels_in_code: false,
        }
    }
}

impl RenderOptions {
    /// Enable or disable soft-break-as-hard-break.
    #[must_use]
    pub fn with_breaks(mut self, enabled: bool) -> Self {
        self.breaks = enabled;
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable code-block exclusion for carousels.
    #[must_use]
    pub fn with_skip_carousels_in_code(mut self, enabled: bool) -> Self {
        self.skip_carousels_in_code = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

/// Markdown renderer that extracts audio tags and carousels.
///
/// Rendering is pure: the renderer holds only its options, never touches
/// the filesystem, and can be shared between threads.
///
/// # Example
///
/// ```
/// use folio_renderer::{MediaRenderer, RenderOptions};
///
/// let renderer = MediaRenderer::with_options(RenderOptions::default().with_breaks(false));
/// let output = renderer.render("<carousel>a.png|Alt A|Cap A; b.png|Alt B</carousel>");
///
/// assert_eq!(output.carousels.len(), 1);
/// assert_eq!(output.carousels[0].images[0].source, "/images/a.png");
/// assert!(output.html.contains(r#"data-carousel-marker="0""#));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MediaRenderer {
    options: RenderOptions,
}

impl MediaRenderer {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Options this renderer was created with.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render markdown, extracting audio tags and carousels.
    ///
    /// Never fails: malformed tags are rendered as literal text.
    #[must_use]
    pub fn render(&self, markdown: &str) -> RenderOutput {
        let carousels = extract_carousels(markdown, self.options.skip_carousels_in_code);
        let audio = extract_audio(&carousels.text, &carousels.offsets);

        let mut html = render_markdown(&audio.text, &self.options);
        reinject_markers(&mut html, audio.items.len(), carousels.items.len());

        tracing::debug!(
            audio_tags = audio.items.len(),
            carousels = carousels.items.len(),
            "Rendered markdown"
        );

        RenderOutput {
            html,
            audio_tags: audio.items,
            carousels: carousels.items,
        }
    }
}

/// Render markdown with default options.
///
/// Shorthand for `MediaRenderer::new().render(markdown)`.
#[must_use]
pub fn render(markdown: &str) -> RenderOutput {
    MediaRenderer::new().render(markdown)
}
