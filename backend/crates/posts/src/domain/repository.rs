//! Repository Trait
//!
//! Interface for post persistence. Implementation is in infrastructure
//! layer. Posts are stored and rewritten as whole aggregates: `update`
//! replaces the embedded collections wholesale, so two concurrent writers
//! of one post race and the last write wins.

use auth::models::UserId;

use crate::domain::entity::{Post, PostId};
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// All posts, newest first
    async fn list(&self) -> PostResult<Vec<Post>>;

    /// One author's posts, newest first
    async fn list_by_author(&self, author_id: &UserId) -> PostResult<Vec<Post>>;

    /// Persist the whole aggregate back (text, likes, comments)
    async fn update(&self, post: &Post) -> PostResult<()>;

    /// Delete a post and, with it, its embedded comments
    async fn delete(&self, post_id: &PostId) -> PostResult<()>;
}
