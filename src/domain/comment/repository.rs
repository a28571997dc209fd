use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Comments of an article, oldest first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
