// src/application/queries/comments/mod.rs
use std::sync::Arc;

use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::{article::ArticleId, comment::CommentRepository},
};

pub struct CommentQueryService {
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    /// Comments of an article in the order they were written.
    pub async fn list_for_article(&self, article_id: i64) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(article_id)?;
        let comments = self.comment_repo.list_for_article(article_id).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
