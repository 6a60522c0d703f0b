//! Error types for threadboard

use crate::types::{CommentId, PostId};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for threadboard
#[derive(Debug, Error)]
pub enum BoardError {
    /// Post not found
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// Reply target does not exist
    #[error("Parent comment not found: {0}")]
    ParentNotFound(CommentId),

    /// Reply would nest deeper than allowed
    #[error("Comment {parent} is at depth {depth}, replies are limited to depth {max_depth}")]
    DepthExceeded {
        parent: CommentId,
        depth: usize,
        max_depth: usize,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown comment view
    #[error("Invalid view type '{0}': expected 'tree' or 'flat'")]
    InvalidViewType(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BoardError>,
    },
}

impl BoardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BoardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error is an expected rejection of caller input
    /// rather than a contract violation or environment failure
    pub fn is_rejection(&self) -> bool {
        match self {
            BoardError::PostNotFound(_)
            | BoardError::ParentNotFound(_)
            | BoardError::DepthExceeded { .. }
            | BoardError::Validation(_) => true,
            BoardError::WithContext { source, .. } => source.is_rejection(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for BoardError {
    fn from(err: toml::de::Error) -> Self {
        BoardError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for BoardError {
    fn from(err: toml::ser::Error) -> Self {
        BoardError::Toml(err.to_string())
    }
}

/// Result type alias for threadboard
pub type Result<T> = std::result::Result<T, BoardError>;
