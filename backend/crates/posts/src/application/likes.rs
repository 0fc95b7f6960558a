//! Like / Unlike Use Cases
//!
//! Idempotency is enforced against the fetched aggregate, then the whole
//! post is written back (read-modify-write; see the repository trait).

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entity::{Post, PostId};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Like/unlike use case
pub struct LikeUseCase<P>
where
    P: PostRepository,
{
    posts: Arc<P>,
}

impl<P> LikeUseCase<P>
where
    P: PostRepository,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Add the requester to the like set. Duplicate likes are rejected and
    /// leave the set unchanged.
    pub async fn like(&self, post_id: &PostId, requester_id: UserId) -> PostResult<Post> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !post.add_like(requester_id) {
            return Err(PostError::AlreadyLiked);
        }

        self.posts.update(&post).await?;

        Ok(post)
    }

    /// Remove the requester from the like set. Only a current liker may
    /// unlike.
    pub async fn unlike(&self, post_id: &PostId, requester_id: &UserId) -> PostResult<Post> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !post.remove_like(requester_id) {
            return Err(PostError::NotLiked);
        }

        self.posts.update(&post).await?;

        Ok(post)
    }
}
