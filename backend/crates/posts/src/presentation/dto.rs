//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{Comment, Like, Post};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub text: String,
}

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub text: String,
}

// ============================================================================
// Responses
// ============================================================================

/// One like entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDto {
    pub user_id: String,
}

impl LikeDto {
    fn from_like(like: &Like) -> Self {
        Self {
            user_id: like.user_id.to_string(),
        }
    }

    pub fn from_likes(likes: &[Like]) -> Vec<Self> {
        likes.iter().map(Self::from_like).collect()
    }
}

/// One comment entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub author: String,
    pub author_name: String,
    pub author_avatar: String,
    pub text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl CommentDto {
    fn from_comment(comment: &Comment) -> Self {
        Self {
            id: comment.comment_id.to_string(),
            author: comment.author_id.to_string(),
            author_name: comment.author_name.clone(),
            author_avatar: comment.author_avatar.clone(),
            text: comment.text.clone(),
            created_at: comment.created_at,
        }
    }

    pub fn from_comments(comments: &[Comment]) -> Vec<Self> {
        comments.iter().map(Self::from_comment).collect()
    }
}

/// Full post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub author_name: String,
    pub author_avatar: String,
    pub text: String,
    pub likes: Vec<LikeDto>,
    pub comments: Vec<CommentDto>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PostResponse {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.post_id.to_string(),
            author: post.author_id.to_string(),
            author_name: post.author_name.clone(),
            author_avatar: post.author_avatar.clone(),
            text: post.text.clone(),
            likes: LikeDto::from_likes(&post.likes),
            comments: CommentDto::from_comments(&post.comments),
            created_at: post.created_at,
        }
    }

    pub fn from_posts(posts: &[Post]) -> Vec<Self> {
        posts.iter().map(Self::from_post).collect()
    }
}
