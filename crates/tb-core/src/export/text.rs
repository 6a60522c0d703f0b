//! Plain text exporter for terminal listings

use super::exporter::Exporter;
use crate::error::Result;
use crate::thread::{PostThread, ThreadNode};

/// Renders a tree section and a flat section
pub struct TextExporter {
    /// Spaces per depth level
    indent_width: usize,
}

impl TextExporter {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }

    fn line(node: &ThreadNode) -> String {
        format!("{}: {}", node.comment.author, node.comment.content)
    }

    fn render_tree(&self, thread: &PostThread, out: &mut String) {
        out.push_str("--- Tree View ---\n");

        let mut stack: Vec<&ThreadNode> = thread.comments.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.depth == 0 {
                out.push_str(&Self::line(node));
            } else {
                out.push_str(&format!("{}└─ {}", self.indent(node.depth), Self::line(node)));
            }
            out.push('\n');
            stack.extend(node.replies.iter().rev());
        }
    }

    fn render_flat(&self, thread: &PostThread, out: &mut String) {
        out.push_str("--- Flat View ---\n");

        for node in thread.flatten() {
            out.push_str(&self.indent(node.depth));
            out.push_str(&Self::line(node));

            let hidden = node.hidden_count();
            if hidden > 0 {
                out.push_str(&format!(" [+{} collapsed]", hidden));
            }
            out.push('\n');
        }
    }
}

impl Default for TextExporter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Exporter for TextExporter {
    fn export(&self, thread: &PostThread) -> Result<String> {
        let mut out = format!("Post #{}: {}\n", thread.post.id, thread.post.title);

        if thread.is_empty() {
            out.push_str("(no comments)\n");
            return Ok(out);
        }

        out.push('\n');
        self.render_tree(thread, &mut out);
        out.push('\n');
        self.render_flat(thread, &mut out);
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}
