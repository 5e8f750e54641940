//! CLI command implementations.

pub(crate) mod post;
pub(crate) mod posts;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config, RenderConfig};
use folio_posts::{PostRepository, PostSettings};
use folio_renderer::RenderOptions;
use folio_storage::FsStorage;

use crate::error::CliError;

pub(crate) use post::PostArgs;
pub(crate) use posts::PostsArgs;
pub(crate) use render::RenderArgs;

/// Arguments locating the blog content, shared by post commands.
#[derive(Args, Debug)]
pub(crate) struct ContentArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Posts directory (overrides config).
    #[arg(short = 'd', long, env = "FOLIO_CONTENT_DIR")]
    content_dir: Option<PathBuf>,
}

impl ContentArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build a post repository over the configured content directory.
pub(crate) fn repository(config: &Config) -> PostRepository<FsStorage> {
    let storage = FsStorage::new(config.content_resolved.dir.clone());
    PostRepository::new(storage).with_settings(PostSettings {
        excerpt_length: config.posts.excerpt_length,
        words_per_minute: config.posts.words_per_minute,
    })
}

/// Convert the `[render]` config section into renderer options.
pub(crate) fn render_options(config: &RenderConfig) -> RenderOptions {
    RenderOptions::default()
        .with_breaks(config.breaks)
        .with_gfm(config.gfm)
        .with_skip_carousels_in_code(config.skip_carousels_in_code)
}
