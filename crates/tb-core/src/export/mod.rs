//! Export functionality for post threads
//!
//! Exporters turn a [`PostThread`](crate::thread::PostThread) snapshot into
//! text for display or hand-off:
//! - plain text (tree and flat sections, as a terminal listing)
//! - JSON (pretty and compact)
//! - Markdown (nested bullet list)
//!
//! # Example
//!
//! ```ignore
//! use tb_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let thread = store.thread(post_id).unwrap();
//! let text = manager.export(&thread, "text")?;
//! ```

mod exporter;
mod json;
mod markdown;
mod text;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportComment, ExportData, JsonExporter};
pub use markdown::MarkdownExporter;
pub use text::TextExporter;
