//! Configuration management for threadboard

use crate::error::{BoardError, Result};
use crate::export::ExportManager;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default deepest nesting level a comment may be created at
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Default descendant count above which a thread auto-collapses
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 10;

/// Largest accepted `limits.max_depth`; thread snapshots recurse per level
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Thread limits
    pub limits: LimitsConfig,
    /// Display settings
    pub display: DisplayConfig,
}

impl BoardConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BoardError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))
    }

    /// Parse and validate configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BoardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the limits and display settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_depth > MAX_DEPTH_LIMIT {
            return Err(BoardError::Config(format!(
                "limits.max_depth must be at most {}",
                MAX_DEPTH_LIMIT
            )));
        }
        if self.limits.max_content_length == Some(0) {
            return Err(BoardError::Config(
                "limits.max_content_length must be at least 1".to_string(),
            ));
        }
        if self.display.indent_width > 16 {
            return Err(BoardError::Config(
                "display.indent_width must be at most 16".to_string(),
            ));
        }

        let formats = ExportManager::with_display(&self.display).available_formats();
        if !formats.contains(&self.display.default_format) {
            return Err(BoardError::Config(format!(
                "display.default_format '{}' is not one of: {}",
                self.display.default_format,
                formats.join(", ")
            )));
        }
        Ok(())
    }
}

/// Thread limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Deepest depth a new comment may land at (top-level is 0)
    pub max_depth: usize,
    /// Auto-collapse a comment once its descendant count exceeds this
    pub collapse_threshold: usize,
    /// Maximum comment length after trimming, in characters; no cap if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_content_length: Option<usize>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            max_content_length: None,
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Spaces per depth level in flat text output
    pub indent_width: usize,
    /// Export format used when none is given
    pub default_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            default_format: "text".to_string(),
        }
    }
}
