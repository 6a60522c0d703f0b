//! Per-author comment index

use crate::types::CommentId;
use std::collections::HashMap;

/// Index of comment ids by author, in authoring order
#[derive(Debug, Clone, Default)]
pub struct AuthorIndex {
    by_author: HashMap<String, Vec<CommentId>>,
}

impl AuthorIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new comment by `author`
    pub fn add(&mut self, author: &str, id: CommentId) {
        self.by_author.entry(author.to_string()).or_default().push(id);
    }

    /// Drop a comment from its author's list
    pub fn remove(&mut self, author: &str, id: CommentId) -> bool {
        let Some(ids) = self.by_author.get_mut(author) else {
            return false;
        };

        let before = ids.len();
        ids.retain(|c| *c != id);
        let removed = ids.len() != before;

        if ids.is_empty() {
            self.by_author.remove(author);
        }
        removed
    }

    /// Comment ids by `author`, oldest first
    pub fn get(&self, author: &str) -> &[CommentId] {
        self.by_author.get(author).map(Vec::as_slice).unwrap_or(&[])
    }
}
