//! Demo command
//!
//! Builds a sample discussion in a fresh store and prints it.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use tb_core::config::BoardConfig;
use tb_core::export::ExportManager;
use tb_core::store::CommentStore;
use tb_core::types::PostId;

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DemoFormat {
    /// Tree and flat listings
    Text,
    /// JSON format
    Json,
    /// Single-line JSON
    JsonCompact,
    /// Markdown bullet list
    Markdown,
}

impl DemoFormat {
    fn format_name(&self) -> &'static str {
        match self {
            DemoFormat::Text => "text",
            DemoFormat::Json => "json",
            DemoFormat::JsonCompact => "json-compact",
            DemoFormat::Markdown => "markdown",
        }
    }
}

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output format (defaults to display.default_format)
    #[arg(long, short, value_enum)]
    pub format: Option<DemoFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Add a busy sub-thread large enough to auto-collapse
    #[arg(long)]
    pub busy: bool,
}

/// Execute the demo command
pub fn execute(args: DemoArgs, config: BoardConfig) -> Result<()> {
    use colored::Colorize;

    let export_manager = ExportManager::with_display(&config.display);
    let format = args
        .format
        .map(|f| f.format_name().to_string())
        .unwrap_or_else(|| config.display.default_format.clone());

    let store = CommentStore::with_config(config);
    let post_id = populate(&store, args.busy)?;

    let thread = store
        .thread(post_id)
        .context("Demo post disappeared from the store")?;

    eprintln!(
        "Created post {} ({} comments)",
        format!("#{}", post_id).cyan(),
        thread.comment_count().to_string().yellow()
    );

    if let Some(output_path) = args.output {
        export_manager
            .export_to_file(&thread, &format, &output_path)
            .context(format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Exported to {}", "✓".green(), output_path.display());
    } else {
        let output = export_manager.export(&thread, &format)?;
        let mut stdout = std::io::stdout();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.ends_with('\n') {
            writeln!(stdout).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Fill the store with the sample discussion, returning its post
fn populate(store: &CommentStore, busy: bool) -> Result<PostId> {
    let post = store.create_post("Welcome to our platform!");

    let alice = store.try_add_comment(post.id, "Alice", "Great platform!", None)?;
    let bob = store.try_add_comment(post.id, "Bob", "I agree with Alice!", None)?;
    store.try_add_comment(post.id, "Charlie", "Thanks Alice!", Some(alice.id))?;
    store.upvote_comment(alice.id);

    if busy {
        let limit = store.config().limits.collapse_threshold;
        for i in 0..=limit {
            store.try_add_comment(
                post.id,
                &format!("Guest{}", i + 1),
                &format!("+1 to Bob ({})", i + 1),
                Some(bob.id),
            )?;
        }
        tracing::info!(comment = %bob.id, "busy thread added");
    }

    Ok(post.id)
}
