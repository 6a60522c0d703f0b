//! Core type definitions for threadboard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post, allocated sequentially from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    /// First id handed out by a fresh store
    pub const FIRST: PostId = PostId(1);

    /// The id following this one
    pub fn next(self) -> Self {
        PostId(self.0 + 1)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a comment, globally unique and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl CommentId {
    /// First id handed out by a fresh store
    pub const FIRST: CommentId = CommentId(1);

    /// The id following this one
    pub fn next(self) -> Self {
        CommentId(self.0 + 1)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
