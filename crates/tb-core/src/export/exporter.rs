//! Exporter trait and manager

use crate::config::DisplayConfig;
use crate::error::{BoardError, Result};
use crate::thread::PostThread;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Trait for thread exporters
pub trait Exporter: Send + Sync {
    /// Export a thread to string
    fn export(&self, thread: &PostThread) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        Self::with_display(&DisplayConfig::default())
    }

    /// Create a manager whose exporters follow the display settings
    pub fn with_display(display: &DisplayConfig) -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(super::text::TextExporter::new(display.indent_width)));
        manager.register(Box::new(super::json::JsonExporter::new(false)));
        manager.register(Box::new(super::json::JsonExporter::compact()));
        manager.register(Box::new(super::markdown::MarkdownExporter::new()));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export a thread to the specified format
    pub fn export(&self, thread: &PostThread, format: &str) -> Result<String> {
        self.lookup(format)?.export(thread)
    }

    /// Export a thread to a file, adding the format's extension when the
    /// path has none
    pub fn export_to_file(&self, thread: &PostThread, format: &str, path: &Path) -> Result<()> {
        let exporter = self.lookup(format)?;
        let content = exporter.export(thread)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        // Atomic write using temp file
        let temp_path = final_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }

    fn lookup(&self, format: &str) -> Result<&dyn Exporter> {
        self.get(format).ok_or_else(|| {
            BoardError::Validation(format!("Unknown export format: {}", format))
        })
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
