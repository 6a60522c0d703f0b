//! JSON exporter for threads

use super::exporter::Exporter;
use crate::error::Result;
use crate::thread::{PostThread, ThreadNode};
use serde::{Deserialize, Serialize};

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, thread: &PostThread) -> Result<String> {
        let data = ExportData::from_thread(thread);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub post_id: u64,
    pub title: String,
    /// Unix timestamp of post creation
    pub created_at: i64,
    /// All comments, hidden ones included
    pub comment_count: usize,
    pub comments: Vec<ExportComment>,
}

impl ExportData {
    /// Create from a thread snapshot
    pub fn from_thread(thread: &PostThread) -> Self {
        Self {
            post_id: thread.post.id.0,
            title: thread.post.title.clone(),
            created_at: thread.post.created_at.timestamp(),
            comment_count: thread.comment_count(),
            comments: thread.comments.iter().map(ExportComment::from_node).collect(),
        }
    }
}

/// Exported comment with nested replies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportComment {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub created_at: i64,
    pub depth: usize,
    pub votes: i64,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<ExportComment>,
}

impl ExportComment {
    pub fn from_node(node: &ThreadNode) -> Self {
        let comment = &node.comment;
        Self {
            id: comment.id.0,
            author: comment.author.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at.timestamp(),
            depth: node.depth,
            votes: comment.vote_count,
            collapsed: comment.collapsed,
            replies: node.replies.iter().map(ExportComment::from_node).collect(),
        }
    }
}
