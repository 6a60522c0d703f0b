//! Markdown exporter for threads

use super::exporter::Exporter;
use crate::error::Result;
use crate::thread::{PostThread, ThreadNode};

/// Markdown exporter rendering comments as a nested bullet list
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new Markdown exporter
    pub fn new() -> Self {
        Self
    }

    fn render_node(node: &ThreadNode, out: &mut String) {
        let comment = &node.comment;
        // Keep multi-line content inside its bullet
        let content = comment.content.lines().collect::<Vec<_>>().join(" ");

        out.push_str(&"  ".repeat(node.depth));
        out.push_str(&format!(
            "- **{}** ({:+}): {}",
            comment.author, comment.vote_count, content
        ));
        if comment.collapsed {
            out.push_str(" _(collapsed)_");
        }
        out.push('\n');
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, thread: &PostThread) -> Result<String> {
        let mut out = format!("# {}\n\n", thread.post.title);

        out.push_str(&format!(
            "_Post #{} · {} comments · created {}_\n\n",
            thread.post.id,
            thread.comment_count(),
            thread.post.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        let mut stack: Vec<&ThreadNode> = thread.comments.iter().rev().collect();
        while let Some(node) = stack.pop() {
            Self::render_node(node, &mut out);
            stack.extend(node.replies.iter().rev());
        }

        Ok(out)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
