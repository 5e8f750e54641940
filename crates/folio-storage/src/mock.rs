//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, validate_slug};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores post sources in memory, keyed by slug. Use the builder methods to
/// configure the mock with test data.
///
/// # Example
///
/// ```
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_post("hello", "---\ntitle: Hello\n---\nBody.");
///
/// assert_eq!(storage.list().unwrap(), vec!["hello"]);
/// assert!(storage.exists("hello"));
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    posts: RwLock<BTreeMap<String, String>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post with the given slug and raw source.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_post(self, slug: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(slug, source);
        self
    }

    /// Add or replace a post after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, slug: impl Into<String>, source: impl Into<String>) {
        self.posts
            .write()
            .unwrap()
            .insert(slug.into(), source.into());
    }

    /// Remove a post.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn remove(&self, slug: &str) {
        self.posts.write().unwrap().remove(slug);
    }
}

impl Storage for MockStorage {
    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.posts.read().unwrap().keys().cloned().collect())
    }

    fn read(&self, slug: &str) -> Result<String, StorageError> {
        validate_slug(slug).map_err(|e| e.with_backend(BACKEND))?;
        self.posts
            .read()
            .unwrap()
            .get(slug)
            .cloned()
            .ok_or_else(|| StorageError::not_found(slug).with_backend(BACKEND))
    }

    fn exists(&self, slug: &str) -> bool {
        self.posts.read().unwrap().contains_key(slug)
    }
}
