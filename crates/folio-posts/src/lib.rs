//! Blog posts for the Folio engine.
//!
//! Posts are markdown files with optional YAML frontmatter, loaded through a
//! [`folio_storage::Storage`] backend. This crate parses them into [`Post`]
//! values (metadata, excerpt, reading time), orders them for listings and
//! renders their bodies with [`folio_renderer::MediaRenderer`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use folio_posts::PostRepository;
//! use folio_renderer::MediaRenderer;
//! use folio_storage::FsStorage;
//!
//! let repository = PostRepository::new(FsStorage::new(PathBuf::from("content")));
//! for post in repository.posts()? {
//!     println!("{} ({})", post.metadata.title, post.reading_time);
//! }
//!
//! let rendered = repository.render("2024-01-15-hello", &MediaRenderer::new())?;
//! println!("{}", rendered.output.html);
//! # Ok::<(), folio_posts::PostError>(())
//! ```

mod error;
mod excerpt;
mod frontmatter;
mod metadata;
mod post;
mod reading_time;
mod repository;

pub use error::PostError;
pub use excerpt::{DEFAULT_EXCERPT_LENGTH, extract_excerpt};
pub use frontmatter::Frontmatter;
pub use metadata::{DEFAULT_AUTHOR, DEFAULT_TITLE, PostMetadata, format_date};
pub use post::{Post, PostSettings};
pub use reading_time::{DEFAULT_WORDS_PER_MINUTE, ReadingTime};
pub use repository::{DEFAULT_RELATED_LIMIT, PostRepository, RenderedPost};
