//! HTTP Handlers
//!
//! Path ids arrive as raw strings and are parsed here: a malformed post id
//! is reported exactly like a missing post, a malformed comment id like a
//! missing comment.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::AuthedUser;
use auth::models::UserId;

use crate::application::{
    CommentUseCase, CreatePostUseCase, DeletePostUseCase, LikeUseCase, PostQueries,
};
use crate::domain::entity::{CommentId, PostId};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{
    AddCommentRequest, CommentDto, CreatePostRequest, LikeDto, PostResponse,
};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostsAppState<P, U>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub posts: Arc<P>,
    pub users: Arc<U>,
}

fn parse_post_id(raw: &str) -> PostResult<PostId> {
    PostId::parse(raw).map_err(|_| PostError::NotFound)
}

fn parse_comment_id(raw: &str) -> PostResult<CommentId> {
    CommentId::parse(raw).map_err(|_| PostError::CommentNotFound)
}

// ============================================================================
// Create / read
// ============================================================================

/// POST /posts
pub async fn create_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Json(req): Json<CreatePostRequest>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.posts.clone(), state.users.clone());

    let post = use_case.execute(claim.subject_id, req.text).await?;

    Ok(Json(PostResponse::from_post(&post)))
}

/// GET /posts
pub async fn list_posts<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(_claim): AuthedUser,
) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let posts = PostQueries::new(state.posts.clone()).list().await?;

    Ok(Json(PostResponse::from_posts(&posts)))
}

/// GET /posts/{id}
pub async fn get_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(_claim): AuthedUser,
    Path(id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let post = PostQueries::new(state.posts.clone()).get(&post_id).await?;

    Ok(Json(PostResponse::from_post(&post)))
}

/// GET /posts/user/{id}
pub async fn list_posts_by_author<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(_claim): AuthedUser,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let author_id = UserId::parse(&id).map_err(|_| PostError::InvalidUserId)?;

    let posts = PostQueries::new(state.posts.clone())
        .list_by_author(&author_id)
        .await?;

    Ok(Json(PostResponse::from_posts(&posts)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /posts/{id}
pub async fn delete_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path(id): Path<String>,
) -> PostResult<StatusCode>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    DeletePostUseCase::new(state.posts.clone())
        .execute(&post_id, &claim.subject_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Likes
// ============================================================================

/// PUT /posts/like/{id}
pub async fn like_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<LikeDto>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let post = LikeUseCase::new(state.posts.clone())
        .like(&post_id, claim.subject_id)
        .await?;

    Ok(Json(LikeDto::from_likes(&post.likes)))
}

/// PUT /posts/unlike/{id}
pub async fn unlike_post<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<LikeDto>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let post = LikeUseCase::new(state.posts.clone())
        .unlike(&post_id, &claim.subject_id)
        .await?;

    Ok(Json(LikeDto::from_likes(&post.likes)))
}

// ============================================================================
// Comments
// ============================================================================

/// PUT /posts/comment/{id}
pub async fn add_comment<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path(id): Path<String>,
    Json(req): Json<AddCommentRequest>,
) -> PostResult<Json<Vec<CommentDto>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;

    let post = CommentUseCase::new(state.posts.clone(), state.users.clone())
        .add(&post_id, claim.subject_id, req.text)
        .await?;

    Ok(Json(CommentDto::from_comments(&post.comments)))
}

/// DELETE /posts/comment/{post_id}/{comment_id}
pub async fn delete_comment<P, U>(
    State(state): State<PostsAppState<P, U>>,
    AuthedUser(claim): AuthedUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> PostResult<Json<Vec<CommentDto>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&post_id)?;
    let comment_id = parse_comment_id(&comment_id)?;

    let post = CommentUseCase::new(state.posts.clone(), state.users.clone())
        .remove(&post_id, &comment_id, &claim.subject_id)
        .await?;

    Ok(Json(CommentDto::from_comments(&post.comments)))
}
