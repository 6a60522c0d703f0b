//! Comment view selection

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a post's comments are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Top-level comments only; callers walk `replies` themselves
    #[default]
    Tree,
    /// Pre-order listing, omitting the replies of collapsed comments
    Flat,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Tree => "tree",
            ViewType::Flat => "flat",
        }
    }
}

impl FromStr for ViewType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tree" => Ok(ViewType::Tree),
            "flat" => Ok(ViewType::Flat),
            other => Err(BoardError::InvalidViewType(other.to_string())),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
