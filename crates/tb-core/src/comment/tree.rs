//! Traversals over the comment arena
//!
//! Comments reference their parent and replies by id, so every walk here
//! goes through the id -> comment map. Unbounded walks (flatten, subtree,
//! descendant count) use an explicit stack instead of recursion.

use super::model::Comment;
use crate::types::CommentId;
use std::collections::HashMap;

/// Arena of live comments keyed by id
pub type CommentArena = HashMap<CommentId, Comment>;

/// Number of parent hops from `id` up to a comment with no parent.
///
/// Only parent links are followed; the chain is not required to lead back
/// to a post. Unknown ids have depth 0.
pub fn depth(comments: &CommentArena, id: CommentId) -> usize {
    let mut depth = 0;
    let mut current = comments.get(&id);

    while let Some(comment) = current {
        let Some(parent) = comment.parent_id else {
            break;
        };
        depth += 1;
        current = comments.get(&parent);
    }

    depth
}

/// Total number of comments below `id`, at any depth
pub fn descendant_count(comments: &CommentArena, id: CommentId) -> usize {
    let Some(root) = comments.get(&id) else {
        return 0;
    };

    let mut count = 0;
    let mut stack: Vec<CommentId> = root.replies.clone();

    while let Some(next) = stack.pop() {
        count += 1;
        if let Some(reply) = comments.get(&next) {
            stack.extend(reply.replies.iter().copied());
        }
    }

    count
}

/// Pre-order listing of `roots` and their replies, skipping the replies of
/// collapsed comments (the collapsed comment itself is still listed)
pub fn flatten(comments: &CommentArena, roots: &[CommentId]) -> Vec<CommentId> {
    let mut out = Vec::new();
    let mut stack: Vec<CommentId> = roots.iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        let Some(comment) = comments.get(&id) else {
            continue;
        };
        out.push(id);
        if !comment.collapsed {
            stack.extend(comment.replies.iter().rev().copied());
        }
    }

    out
}

/// `id` followed by every comment below it, in pre-order
pub fn subtree(comments: &CommentArena, id: CommentId) -> Vec<CommentId> {
    let mut out = Vec::new();
    let mut stack = vec![id];

    while let Some(next) = stack.pop() {
        let Some(comment) = comments.get(&next) else {
            continue;
        };
        out.push(next);
        stack.extend(comment.replies.iter().rev().copied());
    }

    out
}
