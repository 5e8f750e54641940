//! A single blog post.

use serde::Serialize;

use crate::excerpt::{DEFAULT_EXCERPT_LENGTH, extract_excerpt};
use crate::frontmatter::Frontmatter;
use crate::metadata::PostMetadata;
use crate::reading_time::{DEFAULT_WORDS_PER_MINUTE, ReadingTime};
use crate::PostError;

/// Settings for deriving post summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostSettings {
    /// Maximum excerpt length in characters.
    pub excerpt_length: usize,
    /// Reading speed for reading time estimates.
    pub words_per_minute: usize,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// A parsed blog post.
///
/// Serializes flat: metadata fields sit next to `slug`, and the markdown body
/// is exposed as `content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// File name without extension.
    pub slug: String,
    #[serde(flatten)]
    pub metadata: PostMetadata,
    /// Plain-text summary: the frontmatter excerpt, or one extracted from the body.
    pub excerpt: String,
    /// Markdown body without frontmatter.
    #[serde(rename = "content")]
    pub body: String,
    /// Display string such as `"3 min read"`.
    pub reading_time: String,
}

impl Post {
    /// Parse a post from its raw source.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Frontmatter`] if the frontmatter is malformed.
    pub fn parse(
        slug: impl Into<String>,
        source: &str,
        settings: &PostSettings,
    ) -> Result<Self, PostError> {
        let Frontmatter { yaml, body } = Frontmatter::split(source);
        let metadata = yaml.map_or_else(|| Ok(PostMetadata::default()), PostMetadata::from_yaml)?;

        let excerpt = metadata
            .excerpt
            .clone()
            .unwrap_or_else(|| extract_excerpt(body, settings.excerpt_length));
        let reading_time = ReadingTime::estimate(body, settings.words_per_minute);

        Ok(Self {
            slug: slug.into(),
            metadata,
            excerpt,
            body: body.to_owned(),
            reading_time: reading_time.to_string(),
        })
    }
}
