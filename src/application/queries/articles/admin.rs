// src/application/queries/articles/admin.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleQueryService {
    /// Every article including drafts, newest first, for the admin panel.
    pub async fn list_all(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_all().await?;
        tracing::debug!(count = articles.len(), by = %actor.username, "admin listing loaded");
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }

    pub async fn get_by_id(&self, _actor: &AuthenticatedUser, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(ArticleDto::from)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
