//! Error types for post loading.

use folio_storage::StorageError;

/// Error loading a post.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// No post with this slug exists.
    #[error("Post not found: {0}")]
    NotFound(String),

    /// Frontmatter is not valid YAML.
    #[error("Invalid frontmatter: {0}")]
    Frontmatter(String),

    /// Storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PostError {
    /// Check whether this error means the post does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
