//! CLI error types.

use folio_config::ConfigError;
use folio_posts::PostError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Post(#[from] PostError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Check whether the requested post does not exist.
    pub(crate) fn is_not_found(&self) -> bool {
        matches!(self, Self::Post(e) if e.is_not_found())
    }
}
