//! Post Queries
//!
//! Read-only operations over the post store.

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entity::{Post, PostId};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Post query service
pub struct PostQueries<P>
where
    P: PostRepository,
{
    posts: Arc<P>,
}

impl<P> PostQueries<P>
where
    P: PostRepository,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// All posts, newest first
    pub async fn list(&self) -> PostResult<Vec<Post>> {
        self.posts.list().await
    }

    /// One author's posts, newest first
    pub async fn list_by_author(&self, author_id: &UserId) -> PostResult<Vec<Post>> {
        self.posts.list_by_author(author_id).await
    }

    /// Single post by id
    pub async fn get(&self, post_id: &PostId) -> PostResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
