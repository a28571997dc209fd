// src/application/queries/articles/get_by_slug.rs
use std::sync::Arc;

use super::ArticleQueryService;
use crate::{
    application::{
        context::Theme,
        dto::{ArticleDetailDto, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleSlug,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
    pub theme: Theme,
}

impl ArticleQueryService {
    /// A published article with its content rendered for display. Drafts are
    /// reported as missing.
    pub async fn get_published_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|article| article.published)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let theme = query.theme;
        let rendered_html = self
            .render_content(article.content.as_str().to_string(), theme)
            .await?;

        Ok(ArticleDetailDto {
            article: ArticleDto::from(article),
            rendered_html,
            theme,
        })
    }

    /// Run the render pipeline off the async workers.
    pub async fn render_content(&self, content: String, theme: Theme) -> ApplicationResult<String> {
        let renderer = Arc::clone(&self.renderer);
        tokio::task::spawn_blocking(move || renderer.render(&content, theme))
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("render task failed: {err}")))?
    }
}
