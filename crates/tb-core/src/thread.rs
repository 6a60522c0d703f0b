//! Owned snapshots of a post's comment tree
//!
//! A [`PostThread`] is copied out of the store under its lock and can be
//! rendered or serialized afterwards without holding it.

use crate::comment::{Comment, Post};
use serde::{Deserialize, Serialize};

/// A post together with its nested comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostThread {
    pub post: Post,
    /// Top-level comments, in order
    pub comments: Vec<ThreadNode>,
}

/// A comment with its replies resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadNode {
    pub comment: Comment,
    /// Depth below the post (top-level is 0)
    pub depth: usize,
    pub replies: Vec<ThreadNode>,
}

impl PostThread {
    /// Comments in flat-view order, replies of collapsed comments omitted
    pub fn flatten(&self) -> Vec<&ThreadNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&ThreadNode> = self.comments.iter().rev().collect();

        while let Some(node) = stack.pop() {
            out.push(node);
            if !node.comment.collapsed {
                stack.extend(node.replies.iter().rev());
            }
        }

        out
    }

    /// Total comments in the snapshot, including hidden ones
    pub fn comment_count(&self) -> usize {
        self.comments.iter().map(ThreadNode::size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

impl ThreadNode {
    /// This node plus every node below it
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.replies.iter());
        }
        count
    }

    /// Number of replies hidden from the flat view by this node's collapse
    pub fn hidden_count(&self) -> usize {
        if self.comment.collapsed {
            self.size() - 1
        } else {
            0
        }
    }
}
