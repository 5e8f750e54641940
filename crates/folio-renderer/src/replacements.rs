//! Batched string replacement for rendered HTML.

/// Collects `from -> to` string replacements and applies them in one go.
///
/// Used after rendering to turn placeholder comments into marker elements.
/// Replacements are applied in registration order, each replacing every
/// occurrence of its pattern.
///
/// # Example
///
/// ```
/// use folio_renderer::Replacements;
///
/// let mut html = "<p>a</p><!--AUDIO_0-->".to_owned();
/// let mut replacements = Replacements::new();
/// replacements.add("<!--AUDIO_0-->", "<div data-audio-marker=\"0\"></div>");
/// replacements.apply(&mut html);
///
/// assert_eq!(html, "<p>a</p><div data-audio-marker=\"0\"></div>");
/// ```
#[derive(Debug, Default)]
pub struct Replacements {
    items: Vec<(String, String)>,
}

impl Replacements {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collector with room for `capacity` replacements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Register a replacement of every occurrence of `from` with `to`.
    pub fn add(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.items.push((from.into(), to.into()));
    }

    /// Apply all registered replacements, consuming the collector.
    ///
    /// Patterns that do not occur leave `html` untouched (no reallocation).
    pub fn apply(self, html: &mut String) {
        for (from, to) in self.items {
            if !from.is_empty() && html.contains(&from) {
                *html = html.replace(&from, &to);
            }
        }
    }

    /// Check if there are any replacements registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of registered replacements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
