//! Delete Post Use Case

use std::sync::Arc;

use auth::models::UserId;

use crate::domain::entity::PostId;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    posts: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Delete a post. Only the author may do this; there is no admin
    /// override. The post's comments go with it in one document deletion.
    pub async fn execute(&self, post_id: &PostId, requester_id: &UserId) -> PostResult<()> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        if !post.is_authored_by(requester_id) {
            return Err(PostError::NotAuthorized);
        }

        self.posts.delete(post_id).await?;

        tracing::info!(
            post_id = %post_id,
            author_id = %requester_id,
            "Post deleted"
        );

        Ok(())
    }
}
