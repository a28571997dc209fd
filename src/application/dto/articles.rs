// src/application/dto/articles.rs
use crate::application::context::Theme;
use crate::domain::article::Article;
use crate::domain::media::{THUMBNAIL_WIDTH, optimized_image_url};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: i64,
    #[serde(with = "serde_time")]
    pub display_date: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let display_date = article.display_date();
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt.map(|e| e.into_inner()),
            content: article.content.into_inner(),
            cover_image: article.cover_image.map(|c| c.into_inner()),
            tags: article.tags.into_inner(),
            published: article.published,
            published_at: article.published_at,
            author_id: article.author_id.into(),
            display_date,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Card shown in the public listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    #[serde(with = "serde_time")]
    pub display_date: DateTime<Utc>,
}

impl ArticleSummaryDto {
    pub fn from_article(article: Article, storage_base: &str) -> Self {
        let display_date = article.display_date();
        let cover_image = article.cover_image.map(|c| c.into_inner());
        let cover_thumbnail_url = cover_image
            .as_deref()
            .map(|url| optimized_image_url(url, storage_base, THUMBNAIL_WIDTH));
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            excerpt: article.excerpt.map(|e| e.into_inner()),
            cover_image,
            cover_thumbnail_url,
            tags: article.tags.into_inner(),
            display_date,
        }
    }
}

/// Published article with its content prepared for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub rendered_html: String,
    pub theme: Theme,
}
