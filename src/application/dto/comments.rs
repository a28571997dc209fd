// src/application/dto/comments.rs
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Public view of a comment. The author's contact is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub display_name: String,
    pub body: String,
    pub is_anonymous: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            display_name: comment.display_name().to_string(),
            body: comment.body.as_str().to_string(),
            is_anonymous: comment.is_anonymous,
            created_at: comment.created_at,
        }
    }
}
