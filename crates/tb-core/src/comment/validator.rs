//! Comment input validation

use crate::error::{BoardError, Result};

/// Validator for author handles and comment content
#[derive(Debug, Clone, Default)]
pub struct CommentValidator {
    /// Length cap after trimming, in characters; unlimited when `None`
    max_length: Option<usize>,
}

impl CommentValidator {
    /// Create a new validator with no length cap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with an optional length cap
    pub fn with_max_length(max_length: Option<usize>) -> Self {
        Self { max_length }
    }

    /// Validate the author handle
    pub fn validate_author(&self, author: &str) -> Result<()> {
        if author.is_empty() {
            return Err(BoardError::Validation(
                "Comment author cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate comment content
    pub fn validate_content(&self, content: &str) -> Result<()> {
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Err(BoardError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }

        if let Some(max_length) = self.max_length {
            if trimmed.chars().count() > max_length {
                return Err(BoardError::Validation(format!(
                    "Comment content exceeds maximum length of {} characters",
                    max_length
                )));
            }
        }

        Ok(())
    }

    /// Validate a new comment's inputs
    pub fn validate(&self, author: &str, content: &str) -> Result<()> {
        self.validate_author(author)?;
        self.validate_content(content)
    }
}
