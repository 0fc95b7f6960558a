//! Comment Use Cases

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::UserId;

use crate::domain::entity::{Comment, CommentId, Post, PostId};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Comment use case
pub struct CommentUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> CommentUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    /// Add a comment, snapshotting the commenting identity's current name
    /// and avatar, and persist the whole post.
    pub async fn add(
        &self,
        post_id: &PostId,
        author_id: UserId,
        text: String,
    ) -> PostResult<Post> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(PostError::Validation("Text is required".to_string()));
        }

        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        let author = self
            .users
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| PostError::Internal("Comment author not found in store".to_string()))?;

        post.add_comment(Comment::new(&author, text));
        self.posts.update(&post).await?;

        Ok(post)
    }

    /// Remove a comment. Comment ownership is checked, not post ownership:
    /// a post author cannot delete someone else's comment on their own post.
    pub async fn remove(
        &self,
        post_id: &PostId,
        comment_id: &CommentId,
        requester_id: &UserId,
    ) -> PostResult<Post> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        let comment_author = post
            .find_comment(comment_id)
            .map(|comment| comment.author_id)
            .ok_or(PostError::CommentNotFound)?;

        if comment_author != *requester_id {
            return Err(PostError::NotAuthorized);
        }

        post.remove_comment(comment_id);
        self.posts.update(&post).await?;

        Ok(post)
    }
}
