//! Create Post Use Case

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::UserId;

use crate::domain::entity::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Create post use case
pub struct CreatePostUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> CreatePostUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    pub async fn execute(&self, author_id: UserId, text: String) -> PostResult<Post> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(PostError::Validation("Text is required".to_string()));
        }

        // The author record is fetched here so the post carries the
        // name/avatar as they are right now; the snapshot never updates.
        let author = self
            .users
            .find_by_id(&author_id)
            .await?
            .ok_or_else(|| PostError::Internal("Post author not found in store".to_string()))?;

        let post = Post::new(&author, text);
        self.posts.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author_id = %post.author_id,
            "Post created"
        );

        Ok(post)
    }
}
