//! Thread-safe comment store
//!
//! [`CommentStore`] owns every post and comment behind one mutex. Each public
//! method takes the lock for its whole duration, so operations are atomic
//! with respect to each other; the helpers in [`state`] never lock.

mod state;
pub mod view;

pub use view::ViewType;

use crate::comment::{Comment, CommentValidator, Post};
use crate::config::BoardConfig;
use crate::error::Result;
use crate::thread::PostThread;
use crate::types::{CommentId, PostId};
use state::BoardState;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Store of posts and their comment trees
#[derive(Debug)]
pub struct CommentStore {
    state: Mutex<BoardState>,
    config: BoardConfig,
    validator: CommentValidator,
}

impl CommentStore {
    /// Create an empty store with default limits
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            state: Mutex::new(BoardState::new()),
            validator: CommentValidator::with_max_length(config.limits.max_content_length),
            config,
        }
    }

    /// Configuration the store was built with
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // Mutations validate before writing, so state behind a poisoned lock is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new post with no comments
    pub fn create_post(&self, title: impl Into<String>) -> Post {
        self.lock().create_post(title.into())
    }

    /// Add a comment, or a reply when `parent_id` is given.
    ///
    /// Returns `None` when the input is rejected; see [`try_add_comment`]
    /// for the reason.
    ///
    /// [`try_add_comment`]: CommentStore::try_add_comment
    pub fn add_comment(
        &self,
        post_id: PostId,
        author: &str,
        content: &str,
        parent_id: Option<CommentId>,
    ) -> Option<Comment> {
        match self.try_add_comment(post_id, author, content, parent_id) {
            Ok(comment) => Some(comment),
            Err(err) if err.is_rejection() => {
                debug!(post = %post_id, "rejected comment: {}", err);
                None
            }
            Err(err) => {
                warn!(post = %post_id, "failed to add comment: {}", err);
                None
            }
        }
    }

    /// Add a comment, reporting why it was rejected.
    ///
    /// Nothing is written and no id is consumed on rejection. When a reply
    /// pushes its parent's thread over the collapse threshold, the parent is
    /// collapsed.
    pub fn try_add_comment(
        &self,
        post_id: PostId,
        author: &str,
        content: &str,
        parent_id: Option<CommentId>,
    ) -> Result<Comment> {
        let mut state = self.lock();
        self.validator.validate(author, content)?;
        state.add_comment(&self.config.limits, post_id, author, content, parent_id)
    }

    /// List a post's comments in the given view. Unknown posts yield nothing.
    pub fn comments_view(&self, post_id: PostId, view: ViewType) -> Vec<Comment> {
        self.lock().comments_view(post_id, view)
    }

    /// List a post's comments by view name (`"tree"` or `"flat"`)
    pub fn get_comments_view(&self, post_id: PostId, view_type: &str) -> Result<Vec<Comment>> {
        let view: ViewType = view_type.parse()?;
        Ok(self.comments_view(post_id, view))
    }

    pub fn upvote_comment(&self, id: CommentId) -> bool {
        self.lock().update_comment(id, Comment::upvote)
    }

    pub fn downvote_comment(&self, id: CommentId) -> bool {
        self.lock().update_comment(id, Comment::downvote)
    }

    /// Flip a comment's collapsed flag, overriding any auto-collapse
    pub fn toggle_collapse(&self, id: CommentId) -> bool {
        self.lock().update_comment(id, |c| {
            c.toggle_collapsed();
        })
    }

    /// Comments by `author`, oldest first
    pub fn get_user_comments(&self, author: &str) -> Vec<Comment> {
        self.lock().user_comments(author)
    }

    /// Delete a comment together with all of its replies
    pub fn delete_comment(&self, id: CommentId) -> bool {
        self.lock().delete_comment(id).is_some()
    }

    pub fn get_post(&self, id: PostId) -> Option<Post> {
        self.lock().post(id).cloned()
    }

    pub fn get_comment(&self, id: CommentId) -> Option<Comment> {
        self.lock().comment(id).cloned()
    }

    /// Depth of a live comment, 0 for top-level
    pub fn comment_depth(&self, id: CommentId) -> Option<usize> {
        self.lock().depth(id)
    }

    pub fn post_count(&self) -> usize {
        self.lock().post_count()
    }

    /// Number of live comments across all posts
    pub fn comment_count(&self) -> usize {
        self.lock().comment_count()
    }

    /// Id the next accepted comment will receive
    pub fn next_comment_id(&self) -> CommentId {
        self.lock().next_comment_id()
    }

    /// Snapshot of a post and its full reply tree
    pub fn thread(&self, post_id: PostId) -> Option<PostThread> {
        self.lock().thread(post_id)
    }
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn ids(comments: &[Comment]) -> Vec<CommentId> {
        comments.iter().map(|c| c.id).collect()
    }

    fn setup() -> (CommentStore, PostId) {
        let store = CommentStore::new();
        let post = store.create_post("Post Title");
        (store, post.id)
    }

    #[test]
    fn test_post_ids_increase_from_one() {
        let store = CommentStore::new();
        let posts: Vec<_> = (0..3).map(|i| store.create_post(format!("p{i}")).id).collect();
        assert_eq!(posts, vec![PostId(1), PostId(2), PostId(3)]);
        assert!(store.get_post(PostId(2)).unwrap().comments.is_empty());
        assert_eq!(store.post_count(), 3);
    }

    #[test]
    fn test_add_comment_and_reply() {
        let (store, post) = setup();
        let comment = store.add_comment(post, "User1", "This is a comment.", None).unwrap();
        let reply = store
            .add_comment(post, "User2", "This is a reply.", Some(comment.id))
            .unwrap();

        let tree = store.get_comments_view(post, "tree").unwrap();
        assert_eq!(ids(&tree), vec![comment.id]);
        assert_eq!(tree[0].replies, vec![reply.id]);

        let stored = store.get_comment(reply.id).unwrap();
        assert_eq!(stored.parent_id, Some(comment.id));
        assert_eq!(store.comment_depth(reply.id), Some(1));
    }

    #[test]
    fn test_max_reply_depth() {
        let (store, post) = setup();
        let root = store.add_comment(post, "User1", "root", None).unwrap();

        let mut parent = root.id;
        for depth in 1..=4 {
            let reply = store
                .add_comment(post, "User", &format!("Reply {depth}"), Some(parent))
                .unwrap();
            assert_eq!(store.comment_depth(reply.id), Some(depth));
            parent = reply.id;
        }

        let before = (store.comment_count(), store.next_comment_id());
        let result = store.try_add_comment(post, "User6", "too deep", Some(parent));
        assert!(matches!(result, Err(BoardError::DepthExceeded { depth: 4, .. })));
        assert_eq!((store.comment_count(), store.next_comment_id()), before);
        assert!(store.get_comment(parent).unwrap().replies.is_empty());
    }

    #[test]
    fn test_configured_depth_limit() {
        let mut config = BoardConfig::default();
        config.limits.max_depth = 1;
        let store = CommentStore::with_config(config);
        let post = store.create_post("p").id;

        let root = store.add_comment(post, "a", "root", None).unwrap();
        let reply = store.add_comment(post, "a", "reply", Some(root.id)).unwrap();
        assert!(store.add_comment(post, "a", "nested", Some(reply.id)).is_none());
    }

    #[test]
    fn test_flat_comments_view() {
        let (store, post) = setup();
        let c1 = store.add_comment(post, "User1", "First comment.", None).unwrap();
        let c2 = store.add_comment(post, "User2", "Second comment.", None).unwrap();
        assert_eq!(store.comments_view(post, ViewType::Flat).len(), 2);

        let r1 = store
            .add_comment(post, "User3", "Reply to first comment.", Some(c1.id))
            .unwrap();

        let flat = store.get_comments_view(post, "flat").unwrap();
        assert_eq!(ids(&flat), vec![c1.id, r1.id, c2.id]);
        assert!(flat[0].parent_id.is_none());
    }

    #[test]
    fn test_flat_view_hides_collapsed_replies() {
        let (store, post) = setup();
        let c1 = store.add_comment(post, "a", "one", None).unwrap();
        let r1 = store.add_comment(post, "b", "reply", Some(c1.id)).unwrap();
        store.add_comment(post, "c", "nested", Some(r1.id)).unwrap();

        assert!(store.toggle_collapse(c1.id));
        assert_eq!(ids(&store.comments_view(post, ViewType::Flat)), vec![c1.id]);
        assert_eq!(store.comments_view(post, ViewType::Tree)[0].replies, vec![r1.id]);
        assert!(store.get_comment(r1.id).is_some());

        assert!(store.toggle_collapse(c1.id));
        assert_eq!(store.comments_view(post, ViewType::Flat).len(), 3);
    }

    #[test]
    fn test_view_of_unknown_post_is_empty() {
        let store = CommentStore::new();
        assert!(store.get_comments_view(PostId(9), "flat").unwrap().is_empty());
        assert!(store.thread(PostId(9)).is_none());
    }

    #[test]
    fn test_invalid_view_type() {
        let (store, post) = setup();
        let result = store.get_comments_view(post, "nested");
        assert!(matches!(result, Err(BoardError::InvalidViewType(_))));
    }

    #[test]
    fn test_voting() {
        let (store, post) = setup();
        let comment = store.add_comment(post, "User1", "This is a comment.", None).unwrap();

        assert!(store.upvote_comment(comment.id));
        assert_eq!(store.get_comment(comment.id).unwrap().vote_count, 1);

        assert!(store.downvote_comment(comment.id));
        assert!(store.downvote_comment(comment.id));
        assert_eq!(store.get_comment(comment.id).unwrap().vote_count, -1);

        assert!(!store.upvote_comment(CommentId(404)));
        assert!(!store.downvote_comment(CommentId(404)));
        assert!(!store.toggle_collapse(CommentId(404)));
    }

    #[test]
    fn test_auto_collapse() {
        let (store, post) = setup();
        let comment = store.add_comment(post, "User1", "This is a comment.", None).unwrap();

        for i in 0..10 {
            store
                .add_comment(post, &format!("User{}", i + 2), &format!("Reply {}", i + 1), Some(comment.id))
                .unwrap();
        }
        assert!(!store.get_comment(comment.id).unwrap().collapsed);

        store.add_comment(post, "User12", "Reply 11", Some(comment.id)).unwrap();
        assert!(store.get_comment(comment.id).unwrap().collapsed);
    }

    #[test]
    fn test_auto_collapse_counts_nested_replies() {
        let (store, post) = setup();
        let root = store.add_comment(post, "a", "root", None).unwrap();
        let child = store.add_comment(post, "a", "child", Some(root.id)).unwrap();
        for i in 0..10 {
            store.add_comment(post, "b", &format!("n{i}"), Some(child.id)).unwrap();
        }

        // child has 10 descendants, root has 11 but only the direct parent
        // is re-evaluated on insertion
        assert!(!store.get_comment(child.id).unwrap().collapsed);
        assert!(!store.get_comment(root.id).unwrap().collapsed);

        store.add_comment(post, "b", "one more", Some(child.id)).unwrap();
        assert!(store.get_comment(child.id).unwrap().collapsed);
    }

    #[test]
    fn test_manual_expand_after_auto_collapse() {
        let (store, post) = setup();
        let root = store.add_comment(post, "a", "root", None).unwrap();
        for i in 0..11 {
            store.add_comment(post, "b", &format!("r{i}"), Some(root.id)).unwrap();
        }
        assert!(store.toggle_collapse(root.id));
        assert!(!store.get_comment(root.id).unwrap().collapsed);
        assert_eq!(store.comments_view(post, ViewType::Flat).len(), 12);
    }

    #[test]
    fn test_user_index() {
        let (store, post) = setup();
        let a = store.add_comment(post, "Alice", "A", None).unwrap();
        store.add_comment(post, "Bob", "B", None).unwrap();
        let c = store.add_comment(post, "Alice", "C", Some(a.id)).unwrap();

        assert_eq!(ids(&store.get_user_comments("Alice")), vec![a.id, c.id]);
        assert_eq!(store.get_user_comments("Bob").len(), 1);
        assert!(store.get_user_comments("Nobody").is_empty());
    }

    #[test]
    fn test_delete_comment() {
        let (store, post) = setup();
        let c1 = store.add_comment(post, "User1", "First comment.", None).unwrap();
        let c2 = store.add_comment(post, "User2", "Second comment.", None).unwrap();
        let r1 = store
            .add_comment(post, "User3", "Reply to first comment.", Some(c1.id))
            .unwrap();
        let r2 = store.add_comment(post, "User1", "Nested.", Some(r1.id)).unwrap();

        assert!(store.delete_comment(c1.id));

        for gone in [c1.id, r1.id, r2.id] {
            assert!(store.get_comment(gone).is_none());
        }
        assert_eq!(store.get_post(post).unwrap().comments, vec![c2.id]);
        assert!(store.get_user_comments("User1").is_empty());
        assert!(store.get_user_comments("User3").is_empty());
        assert_eq!(store.comment_count(), 1);

        assert!(!store.delete_comment(c1.id));
    }

    #[test]
    fn test_delete_reply_detaches_from_parent() {
        let (store, post) = setup();
        let root = store.add_comment(post, "a", "root", None).unwrap();
        let keep = store.add_comment(post, "b", "keep", Some(root.id)).unwrap();
        let gone = store.add_comment(post, "b", "drop", Some(root.id)).unwrap();

        assert!(store.delete_comment(gone.id));
        assert_eq!(store.get_comment(root.id).unwrap().replies, vec![keep.id]);
        assert_eq!(ids(&store.get_user_comments("b")), vec![keep.id]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let (store, post) = setup();
        let c1 = store.add_comment(post, "a", "one", None).unwrap();
        store.delete_comment(c1.id);
        let c2 = store.add_comment(post, "a", "two", None).unwrap();
        assert_eq!(c2.id, CommentId(2));
    }

    #[test]
    fn test_input_validation() {
        let (store, post) = setup();
        let next = store.next_comment_id();

        assert!(store.add_comment(post, "", "This is a comment.", None).is_none());
        assert!(store.add_comment(post, "User1", "   ", None).is_none());
        assert!(store.add_comment(post, "User1", "", None).is_none());
        assert!(store.add_comment(PostId(99), "User1", "hi", None).is_none());
        assert!(store.add_comment(post, "User1", "hi", Some(CommentId(99))).is_none());

        assert_eq!(store.next_comment_id(), next);
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn test_long_content_accepted_by_default() {
        let (store, post) = setup();
        let text = "x".repeat(10_001);
        let comment = store.try_add_comment(post, "a", &text, None).unwrap();
        assert_eq!(comment.content.len(), 10_001);
    }

    #[test]
    fn test_configured_content_cap() {
        let mut config = BoardConfig::default();
        config.limits.max_content_length = Some(5);
        let store = CommentStore::with_config(config);
        let post = store.create_post("p").id;

        assert!(store.add_comment(post, "a", "short", None).is_some());
        assert!(matches!(
            store.try_add_comment(post, "a", "much too long", None),
            Err(BoardError::Validation(_))
        ));
    }

    #[test]
    fn test_rejection_reasons() {
        let (store, post) = setup();
        assert!(matches!(
            store.try_add_comment(PostId(7), "a", "hi", None),
            Err(BoardError::PostNotFound(PostId(7)))
        ));
        assert!(matches!(
            store.try_add_comment(post, "a", "hi", Some(CommentId(3))),
            Err(BoardError::ParentNotFound(CommentId(3)))
        ));
        assert!(matches!(
            store.try_add_comment(post, "a", " \t", None),
            Err(BoardError::Validation(_))
        ));
    }

    #[test]
    fn test_reply_named_under_another_post_joins_parent_thread() {
        let store = CommentStore::new();
        let p1 = store.create_post("one").id;
        let p2 = store.create_post("two").id;
        let c1 = store.add_comment(p1, "a", "hi", None).unwrap();

        let reply = store.try_add_comment(p2, "b", "reply", Some(c1.id)).unwrap();
        assert_eq!(reply.post_id, p1);
        assert_eq!(reply.parent_id, Some(c1.id));
        assert_eq!(store.get_comment(c1.id).unwrap().replies, vec![reply.id]);
        assert!(store.get_post(p2).unwrap().comments.is_empty());
        assert_eq!(
            ids(&store.comments_view(p1, ViewType::Flat)),
            vec![c1.id, reply.id]
        );

        assert!(store.delete_comment(c1.id));
        assert!(store.get_comment(reply.id).is_none());
    }

    #[test]
    fn test_end_to_end_example() {
        let store = CommentStore::new();
        let post = store.create_post("P").id;
        let c1 = store.add_comment(post, "Alice", "hi", None).unwrap();
        let r1 = store.add_comment(post, "Bob", "hello", Some(c1.id)).unwrap();

        let tree = store.get_comments_view(post, "tree").unwrap();
        assert_eq!(ids(&tree), vec![c1.id]);
        assert_eq!(tree[0].replies, vec![r1.id]);
        assert_eq!(ids(&store.get_comments_view(post, "flat").unwrap()), vec![c1.id, r1.id]);

        store.upvote_comment(c1.id);
        assert_eq!(store.get_comment(c1.id).unwrap().vote_count, 1);

        assert!(store.delete_comment(c1.id));
        assert!(store.get_comments_view(post, "tree").unwrap().is_empty());
        assert!(store.get_user_comments("Bob").is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = Arc::new(CommentStore::new());
        let post = store.create_post("busy").id;
        let root = store.add_comment(post, "op", "root", None).unwrap().id;

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        let author = format!("user{t}");
                        store
                            .add_comment(post, &author, &format!("msg {i}"), Some(root))
                            .unwrap();
                        store.upvote_comment(root);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let root = store.get_comment(root).unwrap();
        assert_eq!(root.replies.len(), 200);
        assert_eq!(root.vote_count, 200);
        assert!(root.collapsed);
        assert_eq!(store.next_comment_id(), CommentId(202));
        assert_eq!(store.get_user_comments("user3").len(), 25);
    }
}
