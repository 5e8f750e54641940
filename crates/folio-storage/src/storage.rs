//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for listing and reading posts, along
//! with [`StorageError`] for unified error handling across backends.
//!
//! # Slugs
//!
//! Posts are addressed by **slug**, the post's file name without extension
//! (e.g. `"2024-01-15-hello"`). Slugs are flat: a slug containing a path
//! separator or `..`, or an empty slug, is rejected with
//! [`StorageErrorKind::InvalidPath`] before any backend is consulted.

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Post does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid slug or path.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path or slug context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Check whether this error means the post does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Check that `slug` names a single post.
///
/// Rejects empty slugs and slugs containing `/`, `\` or `..`, so a slug can
/// never address a file outside the content directory.
///
/// # Errors
///
/// Returns [`StorageErrorKind::InvalidPath`] for a rejected slug.
pub fn validate_slug(slug: &str) -> Result<(), StorageError> {
    if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
        return Err(StorageError::new(StorageErrorKind::InvalidPath).with_path(slug));
    }
    Ok(())
}

/// Storage abstraction for post listing and retrieval.
///
/// Provides a unified interface for accessing posts regardless of backend.
/// All methods take slugs, never file paths; implementations map slugs to
/// their internal storage format.
pub trait Storage: Send + Sync {
    /// List the slugs of all posts, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if listing fails (e.g., permission denied).
    fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Read the raw source of a post, frontmatter included.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the slug is invalid or the post doesn't
    /// exist or can't be read.
    fn read(&self, slug: &str) -> Result<String, StorageError>;

    /// Check if a post exists.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, slug: &str) -> bool;
}
