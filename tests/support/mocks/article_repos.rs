// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use caderno_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle, PageWindow,
};
use caderno_core::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Both article repositories over one vector, ordered like the SQL versions.
#[derive(Default)]
pub struct InMemoryArticles {
    articles: Mutex<Vec<Article>>,
    search_calls: AtomicUsize,
    fail_search: AtomicBool,
}

impl InMemoryArticles {
    pub fn all(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn fail_searches(&self, failing: bool) {
        self.fail_search.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = articles.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            excerpt: article.excerpt,
            content: article.content,
            cover_image: article.cover_image,
            tags: article.tags,
            published: article.published,
            published_at: article.published_at,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.title = update.title;
        article.excerpt = update.excerpt;
        article.content = update.content;
        article.cover_image = update.cover_image;
        article.tags = update.tags;
        article.published = update.published;
        article.published_at = update.published_at;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.all().into_iter().find(|a| a.id == id))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.all().into_iter().find(|a| &a.slug == slug))
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let mut articles = self.all();
        articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(articles)
    }

    async fn search_published(
        &self,
        filter: &ArticleFilter,
        window: PageWindow,
    ) -> DomainResult<(Vec<Article>, u64)> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("database unavailable".into()));
        }
        let mut matches: Vec<Article> = self
            .all()
            .into_iter()
            .filter(|a| a.published)
            .filter(|a| filter.query.as_deref().is_none_or(|q| a.matches_query(q)))
            .collect();
        matches.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(b.id.0.cmp(&a.id.0)));
        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .collect();
        Ok((page, total))
    }
}
