//! Application Layer
//!
//! Use cases for the post aggregate.

pub mod comments;
pub mod create_post;
pub mod delete_post;
pub mod likes;
pub mod queries;

// Re-exports
pub use comments::CommentUseCase;
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use likes::LikeUseCase;
pub use queries::PostQueries;
