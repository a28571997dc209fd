// src/application/controllers/listing.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleSummaryDto, ListingDto, ListingStateKind, PageLinkDto},
        error::ApplicationResult,
        queries::articles::{ArticleQueryService, ListPublishedQuery},
    },
    domain::pagination::{PAGE_SIZE, PageLink, page_links},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    Results,
    /// A query is active and nothing matched it.
    NoMatches { query: String },
    /// No query and nothing is published yet.
    NoArticles,
}

impl ListingState {
    pub fn kind(&self) -> ListingStateKind {
        match self {
            ListingState::Results => ListingStateKind::Results,
            ListingState::NoMatches { .. } => ListingStateKind::NoMatches,
            ListingState::NoArticles => ListingStateKind::NoArticles,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            ListingState::Results => None,
            ListingState::NoMatches { query } => {
                Some(format!("Nenhum artigo encontrado para \"{query}\"."))
            }
            ListingState::NoArticles => Some("Nenhum artigo publicado ainda.".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListingView {
    pub items: Vec<ArticleSummaryDto>,
    pub page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub links: Vec<PageLink>,
    pub state: ListingState,
}

/// Page number plus free-text query over the published articles.
pub struct ListingController {
    queries: Arc<ArticleQueryService>,
    page: u32,
    query: Option<String>,
    view: Option<ListingView>,
}

impl ListingController {
    pub fn new(queries: Arc<ArticleQueryService>) -> Self {
        Self {
            queries,
            page: 1,
            query: None,
            view: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn view(&self) -> Option<&ListingView> {
        self.view.as_ref()
    }

    /// Replace the query; the listing always restarts at page 1.
    pub fn set_query(&mut self, query: Option<&str>) {
        self.query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);
        self.page = 1;
    }

    pub fn go_to(&mut self, page: u32) {
        let last = self
            .view
            .as_ref()
            .map(|v| v.total_pages)
            .filter(|pages| *pages > 0);
        self.page = match last {
            Some(last) => page.clamp(1, last),
            None => page.max(1),
        };
    }

    /// Fetch the current window. A failed fetch keeps the previous view.
    pub async fn load(&mut self) -> ApplicationResult<&ListingView> {
        let result = self
            .queries
            .list_published(ListPublishedQuery {
                page: self.page,
                query: self.query.clone(),
            })
            .await?;

        let state = if result.total > 0 {
            ListingState::Results
        } else {
            match &self.query {
                Some(query) => ListingState::NoMatches {
                    query: query.clone(),
                },
                None => ListingState::NoArticles,
            }
        };

        let view = self.view.insert(ListingView {
            links: page_links(result.page, result.total_pages),
            items: result.items,
            page: result.page,
            total: result.total,
            total_pages: result.total_pages,
            state,
        });
        Ok(view)
    }

    pub fn to_dto(&self) -> Option<ListingDto> {
        let view = self.view.as_ref()?;
        Some(ListingDto {
            items: view.items.clone(),
            page: view.page,
            page_size: PAGE_SIZE,
            total: view.total,
            total_pages: view.total_pages,
            query: self.query.clone(),
            state: view.state.kind(),
            message: view.state.message(),
            links: view.links.iter().copied().map(PageLinkDto::from).collect(),
        })
    }
}
