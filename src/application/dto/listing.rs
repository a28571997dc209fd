// src/application/dto/listing.rs
use crate::domain::pagination::PageLink;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::articles::ArticleSummaryDto;

/// One window of the public listing as returned by the article queries.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub items: Vec<ArticleSummaryDto>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingStateKind {
    Results,
    NoMatches,
    NoArticles,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageLinkDto {
    Page(u32),
    Ellipsis,
}

impl From<PageLink> for PageLinkDto {
    fn from(link: PageLink) -> Self {
        match link {
            PageLink::Page(page) => PageLinkDto::Page(page),
            PageLink::Ellipsis => PageLinkDto::Ellipsis,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub items: Vec<ArticleSummaryDto>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub state: ListingStateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub links: Vec<PageLinkDto>,
}
