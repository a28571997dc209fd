// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    AuthorContact, AuthorName, Comment, CommentBody, CommentId, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_name: Option<String>,
    author_email: Option<String>,
    body: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            // Unparsable stored identity is dropped rather than failing the list.
            author_name: AuthorName::parse(row.author_name).ok().flatten(),
            author_contact: AuthorContact::parse(row.author_email).ok().flatten(),
            body: CommentBody::new(row.body)?,
            is_anonymous: row.is_anonymous,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author_name,
            author_contact,
            body,
            is_anonymous,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author_name, author_email, body, is_anonymous, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, article_id, author_name, author_email, body, is_anonymous, created_at",
        )
        .bind(i64::from(article_id))
        .bind(author_name.as_ref().map(AuthorName::as_str))
        .bind(author_contact.as_ref().map(AuthorContact::as_str))
        .bind(body.as_str())
        .bind(is_anonymous)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author_name, author_email, body, is_anonymous, created_at
             FROM comments WHERE article_id = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}
