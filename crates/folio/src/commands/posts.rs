//! `folio posts` command implementation.

use clap::Args;
use folio_posts::Post;

use super::{ContentArgs, repository};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the posts command.
#[derive(Args, Debug)]
pub(crate) struct PostsArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Print posts as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

impl PostsArgs {
    /// Execute the posts command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the posts directory cannot
    /// be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.content.load_config()?;
        let posts = repository(&config).posts()?;

        if self.json {
            output.result(&serde_json::to_string_pretty(&posts)?);
            return Ok(());
        }

        if posts.is_empty() {
            output.info(&format!(
                "No posts in {}",
                config.content_resolved.dir.display()
            ));
            return Ok(());
        }

        for post in &posts {
            output.result(&format_row(post, &output));
        }
        output.success(&format!("{} posts", posts.len()));
        Ok(())
    }
}

/// One listing line: date, slug, title and reading time.
fn format_row(post: &Post, output: &Output) -> String {
    let date = if post.metadata.date.is_empty() {
        "-"
    } else {
        post.metadata.date.as_str()
    };
    format!(
        "{date:<20} {:<32} {} {}",
        post.slug,
        post.metadata.title,
        output.dim(&format!("({})", post.reading_time)),
    )
}
