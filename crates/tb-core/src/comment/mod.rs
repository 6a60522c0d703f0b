//! Comment system module
//!
//! Comment and post models, the per-author index, input validation and the
//! tree helpers that walk the comment arena.

pub mod model;
pub mod index;
pub mod validator;
pub mod tree;

pub use model::*;
pub use index::AuthorIndex;
pub use validator::CommentValidator;
