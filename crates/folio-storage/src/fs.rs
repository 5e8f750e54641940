//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading posts from a flat directory of
//! markdown files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{Storage, StorageError, validate_slug};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// File extension of post sources.
const EXTENSION: &str = "md";

/// Filesystem storage implementation.
///
/// Each post is one `<slug>.md` file directly inside the content directory.
/// Subdirectories, hidden files and files with other extensions are ignored.
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use folio_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("content"));
/// for slug in storage.list()? {
///     println!("{slug}");
/// }
/// # Ok::<(), folio_storage::StorageError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FsStorage {
    /// Directory holding the post files.
    content_dir: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `content_dir`.
    #[must_use]
    pub fn new(content_dir: PathBuf) -> Self {
        Self { content_dir }
    }

    /// Directory holding the post files.
    #[must_use]
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Resolve the file path of a post.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] with `InvalidPath` for a rejected slug.
    pub fn path_for(&self, slug: &str) -> Result<PathBuf, StorageError> {
        validate_slug(slug).map_err(|e| e.with_backend(BACKEND))?;
        Ok(self.content_dir.join(format!("{slug}.{EXTENSION}")))
    }

    /// Slug of a directory entry, if it is a post file.
    fn slug_of(path: &Path) -> Option<String> {
        if path.extension()? != EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        (!stem.is_empty() && !stem.starts_with('.')).then(|| stem.to_owned())
    }
}

impl Storage for FsStorage {
    fn list(&self) -> Result<Vec<String>, StorageError> {
        if !self.content_dir.exists() {
            tracing::debug!(dir = %self.content_dir.display(), "Content directory missing");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.content_dir).map_err(|e| {
            StorageError::io(e, Some(self.content_dir.clone())).with_backend(BACKEND)
        })?;

        let mut slugs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                StorageError::io(e, Some(self.content_dir.clone())).with_backend(BACKEND)
            })?;
            if !entry.file_type().is_ok_and(|t| t.is_file()) {
                continue;
            }
            if let Some(slug) = Self::slug_of(&entry.path()) {
                slugs.push(slug);
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    fn read(&self, slug: &str) -> Result<String, StorageError> {
        let full_path = self.path_for(slug)?;
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path.clone())).with_backend(BACKEND))
    }

    fn exists(&self, slug: &str) -> bool {
        self.path_for(slug).is_ok_and(|path| path.is_file())
    }
}
