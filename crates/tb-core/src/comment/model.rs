//! Comment and post data models

use crate::types::{CommentId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a post, either top-level or a reply to another comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Post the comment thread belongs to
    pub post_id: PostId,
    /// Author handle
    pub author: String,
    /// Comment content, stored as submitted
    pub content: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// Comment this one replies to, `None` for top-level comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
    /// Direct replies, in insertion order
    #[serde(default)]
    pub replies: Vec<CommentId>,
    /// Net votes, may go negative
    #[serde(default)]
    pub vote_count: i64,
    /// Whether replies are hidden from the flat view
    #[serde(default)]
    pub collapsed: bool,
}

impl Comment {
    /// Create a comment timestamped now
    pub fn new(
        id: CommentId,
        post_id: PostId,
        author: impl Into<String>,
        content: impl Into<String>,
        parent_id: Option<CommentId>,
    ) -> Self {
        Self {
            id,
            post_id,
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
            parent_id,
            replies: Vec::new(),
            vote_count: 0,
            collapsed: false,
        }
    }

    pub fn upvote(&mut self) {
        self.vote_count += 1;
    }

    pub fn downvote(&mut self) {
        self.vote_count -= 1;
    }

    /// Flip the collapsed flag, returning the new value
    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Remove a direct reply, returning whether it was present
    pub fn detach_reply(&mut self, reply: CommentId) -> bool {
        detach(&mut self.replies, reply)
    }
}

/// A post holding a list of top-level comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Top-level comments, in insertion order
    #[serde(default)]
    pub comments: Vec<CommentId>,
    /// When the post was created
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create an empty post timestamped now
    pub fn new(id: PostId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Remove a top-level comment, returning whether it was present
    pub fn detach_comment(&mut self, comment: CommentId) -> bool {
        detach(&mut self.comments, comment)
    }
}

fn detach(ids: &mut Vec<CommentId>, id: CommentId) -> bool {
    match ids.iter().position(|c| *c == id) {
        Some(pos) => {
            ids.remove(pos);
            true
        }
        None => false,
    }
}
