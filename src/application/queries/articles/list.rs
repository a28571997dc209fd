// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticlePage, ArticleSummaryDto},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, PageWindow},
        pagination::{PAGE_SIZE, page_count},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListPublishedQuery {
    /// 1-based; 0 is read as 1.
    pub page: u32,
    pub query: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_published(&self, query: ListPublishedQuery) -> ApplicationResult<ArticlePage> {
        let page = query.page.max(1);
        let filter = ArticleFilter::with_query(query.query.as_deref());
        let window = PageWindow::for_page(page, PAGE_SIZE);

        let (articles, total) = self.read_repo.search_published(&filter, window).await?;
        tracing::debug!(page, total, query = ?filter.query, "listing window loaded");

        Ok(ArticlePage {
            items: articles
                .into_iter()
                .map(|article| ArticleSummaryDto::from_article(article, &self.storage_base))
                .collect(),
            total,
            page,
            page_size: PAGE_SIZE,
            total_pages: page_count(total, PAGE_SIZE),
        })
    }
}
