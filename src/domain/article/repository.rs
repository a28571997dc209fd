use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Offset/limit window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u32,
}

impl PageWindow {
    /// Window for a 1-based page number; page 0 is treated as page 1.
    pub fn for_page(page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        let limit = page_size.max(1);
        Self {
            offset: u64::from(page - 1) * u64::from(limit),
            limit,
        }
    }
}

/// Filter for the public listing. A query matches title, excerpt or any tag,
/// case-insensitively, by substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub query: Option<String>,
}

impl ArticleFilter {
    pub fn with_query(query: Option<&str>) -> Self {
        Self {
            query: query
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(str::to_string),
        }
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Every article, drafts included, newest creation first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    /// Published articles matching `filter`, newest publish time first, plus
    /// the total number of matches.
    async fn search_published(
        &self,
        filter: &ArticleFilter,
        window: PageWindow,
    ) -> DomainResult<(Vec<Article>, u64)>;
}
