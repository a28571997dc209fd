// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{AuthorContact, AuthorName, CommentBody, CommentId};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

pub const ANONYMOUS_DISPLAY_NAME: &str = "Anônimo";

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_name: Option<AuthorName>,
    pub author_contact: Option<AuthorContact>,
    pub body: CommentBody,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Name shown next to the comment. Anonymous comments never reveal the
    /// stored name, even when one is present.
    pub fn display_name(&self) -> &str {
        match (&self.author_name, self.is_anonymous) {
            (Some(name), false) => name.as_str(),
            _ => ANONYMOUS_DISPLAY_NAME,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author_name: Option<AuthorName>,
    pub author_contact: Option<AuthorContact>,
    pub body: CommentBody,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Anonymous submissions drop name and contact before they are stored.
    pub fn new(
        article_id: ArticleId,
        name: Option<String>,
        contact: Option<String>,
        body: impl Into<String>,
        is_anonymous: bool,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let body = CommentBody::new(body)?;
        let (author_name, author_contact) = if is_anonymous {
            (None, None)
        } else {
            (AuthorName::parse(name)?, AuthorContact::parse(contact)?)
        };
        Ok(Self {
            article_id,
            author_name,
            author_contact,
            body,
            is_anonymous,
            created_at,
        })
    }
}
