//! tb-core - Core library for threadboard
//!
//! This crate provides the comment-board logic: posts holding nested comment
//! trees with a depth cap, auto-collapse of long threads, voting, a per-user
//! index and cascading deletion, all behind a single store lock.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod store;
pub mod thread;
pub mod export;

pub use error::{BoardError, Result};
pub use store::CommentStore;
pub use types::*;
