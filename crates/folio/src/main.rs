//! Folio CLI - Markdown blog engine.
//!
//! Provides commands for:
//! - `render`: Render a markdown file, extracting audio tags and carousels
//! - `posts`: List posts in the content directory
//! - `post`: Render a single post as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PostArgs, PostsArgs, RenderArgs};
use output::Output;

/// Folio - Markdown blog engine.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file and print the result as JSON.
    Render(RenderArgs),
    /// List all posts, newest first.
    Posts(PostsArgs),
    /// Render one post and print it as JSON.
    Post(PostArgs),
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let filter = log_filter(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Posts(args) => args.execute(),
        Commands::Post(args) => args.execute(),
    };

    if let Err(err) = result {
        if err.is_not_found() {
            output.error(&err.to_string());
        } else {
            output.error(&format!("Error: {err}"));
        }
        std::process::exit(1);
    }
}
