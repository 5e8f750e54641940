//! Storage abstraction for the Folio blog engine.
//!
//! This crate provides a [`Storage`] trait that separates post loading from
//! the underlying backend, so post handling can be unit tested without
//! touching the real filesystem.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `list()`, `read()`, and `exists()` methods
//! - [`FsStorage`] implementation for a directory of `<slug>.md` files
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use folio_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("content"));
//! let source = storage.read("2024-01-15-hello")?;
//! # Ok::<(), folio_storage::StorageError>(())
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind, validate_slug};
