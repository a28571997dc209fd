// src/application/controllers/article_reader.rs
use std::sync::Arc;

use tokio::sync::watch;

use crate::application::{
    context::{Theme, ThemeContext},
    dto::ArticleDetailDto,
    error::ApplicationResult,
    queries::articles::{ArticleQueryService, GetArticleBySlugQuery},
};

/// One published article rendered for the theme held by a [`ThemeContext`].
pub struct ArticleReader {
    queries: Arc<ArticleQueryService>,
    theme: ThemeContext,
    theme_rx: watch::Receiver<Theme>,
    detail: ArticleDetailDto,
}

impl ArticleReader {
    pub async fn open(
        slug: String,
        queries: Arc<ArticleQueryService>,
        theme: ThemeContext,
    ) -> ApplicationResult<Self> {
        let mut theme_rx = theme.subscribe();
        let current = *theme_rx.borrow_and_update();
        let detail = queries
            .get_published_by_slug(GetArticleBySlugQuery {
                slug,
                theme: current,
            })
            .await?;
        Ok(Self {
            queries,
            theme,
            theme_rx,
            detail,
        })
    }

    pub fn detail(&self) -> &ArticleDetailDto {
        &self.detail
    }

    pub fn into_detail(self) -> ArticleDetailDto {
        self.detail
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    /// Re-render the stored content if the theme moved since the last render.
    /// Returns whether the rendered HTML was replaced.
    pub async fn refresh(&mut self) -> ApplicationResult<bool> {
        if !self.theme_rx.has_changed().unwrap_or(false) {
            return Ok(false);
        }
        let theme = *self.theme_rx.borrow_and_update();
        if theme == self.detail.theme {
            return Ok(false);
        }
        let rendered_html = self
            .queries
            .render_content(self.detail.article.content.clone(), theme)
            .await?;
        self.detail.rendered_html = rendered_html;
        self.detail.theme = theme;
        tracing::debug!(slug = %self.detail.article.slug, theme = theme.as_str(), "article re-rendered");
        Ok(true)
    }

    /// Flip the theme and re-render.
    pub async fn toggle_theme(&mut self) -> ApplicationResult<Theme> {
        let next = self.theme.toggle();
        self.refresh().await?;
        Ok(next)
    }
}
