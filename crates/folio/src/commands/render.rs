//! `folio render` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_posts::Frontmatter;
use folio_renderer::{MediaRenderer, RenderOptions, RenderOutput};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Markdown file to render. Frontmatter, if any, is skipped.
    file: PathBuf,

    /// Keep single newlines as soft breaks.
    #[arg(long)]
    no_breaks: bool,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Leave carousels inside code blocks untouched.
    #[arg(long)]
    skip_carousels_in_code: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let source = std::fs::read_to_string(&self.file)?;
        let rendered = self.render(&source);

        tracing::info!(
            file = %self.file.display(),
            audio_tags = rendered.audio_tags.len(),
            carousels = rendered.carousels.len(),
            "Rendered file"
        );

        output.result(&serde_json::to_string_pretty(&rendered)?);
        Ok(())
    }

    fn options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_breaks(!self.no_breaks)
            .with_gfm(!self.no_gfm)
            .with_skip_carousels_in_code(self.skip_carousels_in_code)
    }

    fn render(&self, source: &str) -> RenderOutput {
        let body = Frontmatter::split(source).body;
        MediaRenderer::with_options(self.options()).render(body)
    }
}
