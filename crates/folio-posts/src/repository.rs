//! Post repository over a [`Storage`] backend.

use std::cmp::Ordering;
use std::sync::LazyLock;

use folio_renderer::{MediaRenderer, RenderOutput};
use folio_storage::{Storage, StorageError};
use regex::Regex;
use serde::Serialize;

use crate::post::{Post, PostSettings};
use crate::PostError;

/// Default number of posts returned by [`PostRepository::other_posts`].
pub const DEFAULT_RELATED_LIMIT: usize = 5;

/// `YYYY-MM-DD` at the start of a slug.
static SLUG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

/// A post together with its rendered body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedPost {
    pub post: Post,
    /// Serialized inline as `html`, `audioTags` and `carousels`.
    #[serde(flatten)]
    pub output: RenderOutput,
}

/// Loads, orders and renders posts from a storage backend.
///
/// # Example
///
/// ```
/// use folio_posts::PostRepository;
/// use folio_storage::MockStorage;
///
/// let storage = MockStorage::new()
///     .with_post("2024-01-15-hello", "---\ntitle: Hello\n---\nFirst.")
///     .with_post("2024-02-01-again", "---\ntitle: Again\n---\nSecond.");
/// let repository = PostRepository::new(storage);
///
/// let posts = repository.posts().unwrap();
/// assert_eq!(posts[0].slug, "2024-02-01-again");
/// ```
#[derive(Debug)]
pub struct PostRepository<S> {
    storage: S,
    settings: PostSettings,
}

impl<S: Storage> PostRepository<S> {
    /// Create a repository with default settings.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: PostSettings::default(),
        }
    }

    /// Use custom excerpt and reading time settings.
    #[must_use]
    pub fn with_settings(mut self, settings: PostSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load all posts, newest first.
    ///
    /// Slugs starting with a `YYYY-MM-DD` date come first, newest date first.
    /// The rest follow in descending slug order. Posts that fail to load are
    /// logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Storage`] if the posts cannot be listed.
    pub fn posts(&self) -> Result<Vec<Post>, PostError> {
        let mut posts: Vec<Post> = self
            .storage
            .list()?
            .into_iter()
            .filter_map(|slug| match self.post(&slug) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(slug = %slug, error = %e, "Failed to load post");
                    None
                }
            })
            .collect();

        posts.sort_by(|a, b| compare_slugs(&a.slug, &b.slug));
        Ok(posts)
    }

    /// Load a single post.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::NotFound`] if no post has this slug, or another
    /// [`PostError`] if it cannot be read or parsed.
    pub fn post(&self, slug: &str) -> Result<Post, PostError> {
        let source = self.storage.read(slug).map_err(|e| not_found_or(slug, e))?;
        Post::parse(slug, &source, &self.settings)
    }

    /// Posts other than `slug`, in listing order, at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Storage`] if the posts cannot be listed.
    pub fn other_posts(&self, slug: &str, limit: usize) -> Result<Vec<Post>, PostError> {
        Ok(self
            .posts()?
            .into_iter()
            .filter(|post| post.slug != slug)
            .take(limit)
            .collect())
    }

    /// Load a post and render its body.
    ///
    /// Media positions in the output are byte offsets into the body, after
    /// the frontmatter.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`post`](Self::post).
    pub fn render(&self, slug: &str, renderer: &MediaRenderer) -> Result<RenderedPost, PostError> {
        let post = self.post(slug)?;
        let output = renderer.render(&post.body);

        tracing::info!(
            slug,
            audio_tags = output.audio_tags.len(),
            carousels = output.carousels.len(),
            "Rendered post"
        );

        Ok(RenderedPost { post, output })
    }
}

fn not_found_or(slug: &str, err: StorageError) -> PostError {
    if err.is_not_found() {
        PostError::NotFound(slug.to_owned())
    } else {
        PostError::Storage(err)
    }
}

/// Listing order: dated slugs first (newest first), then the rest by slug
/// descending.
fn compare_slugs(a: &str, b: &str) -> Ordering {
    match (slug_date(a), slug_date(b)) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}

fn slug_date(slug: &str) -> Option<&str> {
    SLUG_DATE_RE.find(slug).map(|m| m.as_str())
}
