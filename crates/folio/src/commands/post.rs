//! `folio post` command implementation.

use clap::Args;
use folio_posts::{Post, RenderedPost};
use folio_renderer::MediaRenderer;
use serde::Serialize;

use super::{ContentArgs, render_options, repository};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the post command.
#[derive(Args, Debug)]
pub(crate) struct PostArgs {
    /// Slug of the post (file name without `.md`).
    slug: String,

    #[command(flatten)]
    content: ContentArgs,

    /// Include other posts for a "more posts" sidebar.
    #[arg(long)]
    related: bool,
}

/// JSON document printed by the post command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostPage<'a> {
    #[serde(flatten)]
    rendered: &'a RenderedPost,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_posts: Option<Vec<Post>>,
}

impl PostArgs {
    /// Execute the post command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the post does not exist or
    /// cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.content.load_config()?;
        let repository = repository(&config);
        let renderer = MediaRenderer::with_options(render_options(&config.render));

        let rendered = repository.render(&self.slug, &renderer)?;
        let other_posts = if self.related {
            Some(repository.other_posts(&self.slug, config.posts.related_limit)?)
        } else {
            None
        };

        let page = PostPage {
            rendered: &rendered,
            other_posts,
        };
        output.result(&serde_json::to_string_pretty(&page)?);
        Ok(())
    }
}
