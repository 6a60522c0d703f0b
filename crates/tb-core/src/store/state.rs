//! Unlocked board state
//!
//! Every method here assumes the caller already holds the store lock.

use super::view::ViewType;
use crate::comment::tree::{self, CommentArena};
use crate::comment::{AuthorIndex, Comment, Post};
use crate::config::LimitsConfig;
use crate::error::{BoardError, Result};
use crate::thread::{PostThread, ThreadNode};
use crate::types::{CommentId, PostId};
use std::collections::HashMap;
use tracing::{debug, info};

/// Posts, the comment arena and the author index
#[derive(Debug)]
pub(crate) struct BoardState {
    posts: HashMap<PostId, Post>,
    comments: CommentArena,
    authors: AuthorIndex,
    next_post_id: PostId,
    next_comment_id: CommentId,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            posts: HashMap::new(),
            comments: CommentArena::new(),
            authors: AuthorIndex::new(),
            next_post_id: PostId::FIRST,
            next_comment_id: CommentId::FIRST,
        }
    }

    pub fn create_post(&mut self, title: String) -> Post {
        let id = self.next_post_id;
        self.next_post_id = id.next();

        let post = Post::new(id, title);
        self.posts.insert(id, post.clone());
        info!(post = %id, "created post");
        post
    }

    /// Insert a comment whose author and content were already validated
    pub fn add_comment(
        &mut self,
        limits: &LimitsConfig,
        post_id: PostId,
        author: &str,
        content: &str,
        parent_id: Option<CommentId>,
    ) -> Result<Comment> {
        if !self.posts.contains_key(&post_id) {
            return Err(BoardError::PostNotFound(post_id));
        }

        // Replies live in their parent's thread, whichever post was named
        let mut thread_post = post_id;

        if let Some(parent_id) = parent_id {
            let parent = self
                .comments
                .get(&parent_id)
                .ok_or(BoardError::ParentNotFound(parent_id))?;
            thread_post = parent.post_id;

            let depth = tree::depth(&self.comments, parent_id);
            if depth >= limits.max_depth {
                return Err(BoardError::DepthExceeded {
                    parent: parent_id,
                    depth,
                    max_depth: limits.max_depth,
                });
            }
        }

        let id = self.next_comment_id;
        self.next_comment_id = id.next();

        let comment = Comment::new(id, thread_post, author, content, parent_id);
        self.comments.insert(id, comment.clone());
        self.authors.add(author, id);

        match parent_id {
            None => {
                if let Some(post) = self.posts.get_mut(&post_id) {
                    post.comments.push(id);
                }
            }
            Some(parent_id) => {
                if let Some(parent) = self.comments.get_mut(&parent_id) {
                    parent.replies.push(id);
                }
                self.auto_collapse(limits, parent_id);
            }
        }

        debug!(comment = %id, post = %thread_post, author, "added comment");
        Ok(comment)
    }

    /// Collapse `id` once its thread outgrows the threshold. Never expands.
    fn auto_collapse(&mut self, limits: &LimitsConfig, id: CommentId) {
        let total = tree::descendant_count(&self.comments, id);
        if total <= limits.collapse_threshold {
            return;
        }

        if let Some(comment) = self.comments.get_mut(&id) {
            if !comment.collapsed {
                comment.collapsed = true;
                info!(comment = %id, replies = total, "auto-collapsed thread");
            }
        }
    }

    pub fn comments_view(&self, post_id: PostId, view: ViewType) -> Vec<Comment> {
        let Some(post) = self.posts.get(&post_id) else {
            return Vec::new();
        };

        let ids = match view {
            ViewType::Tree => post.comments.clone(),
            ViewType::Flat => tree::flatten(&self.comments, &post.comments),
        };
        self.collect(&ids)
    }

    /// Apply `f` to a comment, returning whether it exists
    pub fn update_comment(&mut self, id: CommentId, f: impl FnOnce(&mut Comment)) -> bool {
        match self.comments.get_mut(&id) {
            Some(comment) => {
                f(comment);
                true
            }
            None => false,
        }
    }

    pub fn user_comments(&self, author: &str) -> Vec<Comment> {
        self.collect(self.authors.get(author))
    }

    /// Remove a comment and everything below it, returning how many
    /// comments were removed
    pub fn delete_comment(&mut self, id: CommentId) -> Option<usize> {
        let comment = self.comments.get(&id)?;
        let (post_id, parent_id) = (comment.post_id, comment.parent_id);

        match parent_id {
            None => {
                if let Some(post) = self.posts.get_mut(&post_id) {
                    post.detach_comment(id);
                }
            }
            Some(parent_id) => {
                if let Some(parent) = self.comments.get_mut(&parent_id) {
                    parent.detach_reply(id);
                }
            }
        }

        let doomed = tree::subtree(&self.comments, id);
        for doomed_id in &doomed {
            if let Some(removed) = self.comments.remove(doomed_id) {
                self.authors.remove(&removed.author, *doomed_id);
            }
        }

        info!(comment = %id, removed = doomed.len(), "deleted comment");
        Some(doomed.len())
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id)
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.get(&id)
    }

    pub fn depth(&self, id: CommentId) -> Option<usize> {
        self.comments
            .contains_key(&id)
            .then(|| tree::depth(&self.comments, id))
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn next_comment_id(&self) -> CommentId {
        self.next_comment_id
    }

    /// Owned nested snapshot of a post's whole thread
    pub fn thread(&self, post_id: PostId) -> Option<PostThread> {
        let post = self.posts.get(&post_id)?;
        let comments = post
            .comments
            .iter()
            .filter_map(|id| self.node(*id, 0))
            .collect();

        Some(PostThread {
            post: post.clone(),
            comments,
        })
    }

    fn node(&self, id: CommentId, depth: usize) -> Option<ThreadNode> {
        let comment = self.comments.get(&id)?;
        let replies = comment
            .replies
            .iter()
            .filter_map(|reply| self.node(*reply, depth + 1))
            .collect();

        Some(ThreadNode {
            comment: comment.clone(),
            depth,
            replies,
        })
    }

    fn collect(&self, ids: &[CommentId]) -> Vec<Comment> {
        ids.iter()
            .filter_map(|id| self.comments.get(id))
            .cloned()
            .collect()
    }
}
