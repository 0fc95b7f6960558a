//! Post Aggregate
//!
//! A post together with its embedded like set and comment list, treated as
//! one document. State transitions on the embedded collections live here;
//! ownership decisions stay in the use cases.

use chrono::{DateTime, Utc};
use kernel::id::Id;
use serde::{Deserialize, Serialize};

use auth::models::{User, UserId};

pub struct PostMarker;
pub type PostId = Id<PostMarker>;

pub struct CommentMarker;
pub type CommentId = Id<CommentMarker>;

/// One entry in a post's like set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub user_id: UserId,
}

/// A comment embedded in a post
///
/// Carries its own author snapshot, taken when the comment is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub author_id: UserId,
    pub author_name: String,
    pub author_avatar: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment, snapshotting the commenting identity's current
    /// name and avatar. The snapshot does not track later identity edits.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            comment_id: CommentId::new(),
            author_id: author.user_id,
            author_name: author.name.clone(),
            author_avatar: author.avatar_url.as_str().to_string(),
            text,
            created_at: Utc::now(),
        }
    }
}

/// Post aggregate
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    /// Owning identity; only this user may delete the post
    pub author_id: UserId,
    /// Author name snapshot, fixed at creation
    pub author_name: String,
    /// Author avatar snapshot, fixed at creation
    pub author_avatar: String,
    pub text: String,
    /// At most one entry per user, newest first
    pub likes: Vec<Like>,
    /// Newest first
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post, snapshotting the author's current name and avatar
    pub fn new(author: &User, text: String) -> Self {
        Self {
            post_id: PostId::new(),
            author_id: author.user_id,
            author_name: author.name.clone(),
            author_avatar: author.avatar_url.as_str().to_string(),
            text,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }

    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|like| like.user_id == *user_id)
    }

    /// Prepend a like. Returns false (and leaves the set unchanged) when
    /// the user already appears in it.
    pub fn add_like(&mut self, user_id: UserId) -> bool {
        if self.is_liked_by(&user_id) {
            return false;
        }
        self.likes.insert(0, Like { user_id });
        true
    }

    /// Remove a user's like. Returns false when the user had not liked.
    pub fn remove_like(&mut self, user_id: &UserId) -> bool {
        if !self.is_liked_by(user_id) {
            return false;
        }
        self.likes.retain(|like| like.user_id != *user_id);
        true
    }

    /// Prepend a comment (newest-first ordering)
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn find_comment(&self, comment_id: &CommentId) -> Option<&Comment> {
        self.comments
            .iter()
            .find(|comment| comment.comment_id == *comment_id)
    }

    /// Remove exactly the comment with this id; remaining comments keep
    /// their relative order. Returns false when the id is absent.
    pub fn remove_comment(&mut self, comment_id: &CommentId) -> bool {
        let Some(index) = self
            .comments
            .iter()
            .position(|comment| comment.comment_id == *comment_id)
        else {
            return false;
        };
        self.comments.remove(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::models::{Email, RawPassword, UserPassword};

    fn test_user(name: &str, email: &str) -> User {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        User::new(
            name.to_string(),
            Email::new(email).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_post_snapshots_author() {
        let author = test_user("A", "a@x.com");
        let post = Post::new(&author, "hello".to_string());

        assert_eq!(post.author_id, author.user_id);
        assert_eq!(post.author_name, "A");
        assert_eq!(post.author_avatar, author.avatar_url.as_str());
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_like_set_has_no_duplicates() {
        let author = test_user("A", "a@x.com");
        let mut post = Post::new(&author, "hello".to_string());
        let liker = UserId::new();

        assert!(post.add_like(liker));
        assert!(!post.add_like(liker));
        assert_eq!(post.likes.len(), 1);
    }

    #[test]
    fn test_likes_are_prepended() {
        let author = test_user("A", "a@x.com");
        let mut post = Post::new(&author, "hello".to_string());
        let first = UserId::new();
        let second = UserId::new();

        post.add_like(first);
        post.add_like(second);

        assert_eq!(post.likes[0].user_id, second);
        assert_eq!(post.likes[1].user_id, first);
    }

    #[test]
    fn test_remove_like_only_for_likers() {
        let author = test_user("A", "a@x.com");
        let mut post = Post::new(&author, "hello".to_string());
        let liker = UserId::new();

        assert!(!post.remove_like(&liker));
        post.add_like(liker);
        assert!(post.remove_like(&liker));
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_comments_prepend_and_stable_removal() {
        let author = test_user("A", "a@x.com");
        let commenter = test_user("B", "b@x.com");
        let mut post = Post::new(&author, "hello".to_string());

        let c1 = Comment::new(&commenter, "one".to_string());
        let c2 = Comment::new(&commenter, "two".to_string());
        let c3 = Comment::new(&commenter, "three".to_string());
        let c2_id = c2.comment_id;

        post.add_comment(c1.clone());
        post.add_comment(c2);
        post.add_comment(c3.clone());

        // Newest first
        assert_eq!(post.comments[0].text, "three");
        assert_eq!(post.comments[2].text, "one");

        // Removing the middle entry keeps the rest in order
        assert!(post.remove_comment(&c2_id));
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[0].comment_id, c3.comment_id);
        assert_eq!(post.comments[1].comment_id, c1.comment_id);

        // Absent id
        assert!(!post.remove_comment(&c2_id));
    }
}
