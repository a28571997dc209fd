// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTags, ArticleTitle, CoverImage,
};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<ArticleExcerpt>,
    pub content: ArticleContent,
    pub cover_image: Option<CoverImage>,
    pub tags: ArticleTags,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// The publish timestamp is stamped on the first transition only.
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published = true;
        if self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    /// Unpublishing keeps `published_at`.
    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.published = false;
        self.updated_at = now;
    }

    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        if published {
            self.publish(now);
        } else {
            self.unpublish(now);
        }
    }

    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        excerpt: Option<ArticleExcerpt>,
        content: ArticleContent,
        cover_image: Option<CoverImage>,
        tags: ArticleTags,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.excerpt = excerpt;
        self.content = content;
        self.cover_image = cover_image;
        self.tags = tags;
        self.updated_at = now;
    }

    /// Date shown to readers: publish time, or creation time for never-published drafts.
    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    /// Case-insensitive substring match against title, excerpt or any tag.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.as_str().to_lowercase().contains(&needle)
            || self
                .excerpt
                .as_ref()
                .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
            || self.tags.contains_fragment(&needle)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub excerpt: Option<ArticleExcerpt>,
    pub content: ArticleContent,
    pub cover_image: Option<CoverImage>,
    pub tags: ArticleTags,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable fields of an article. The slug is not part
/// of an update: it is fixed when the article is created.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub excerpt: Option<ArticleExcerpt>,
    pub content: ArticleContent,
    pub cover_image: Option<CoverImage>,
    pub tags: ArticleTags,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            cover_image: article.cover_image.clone(),
            tags: article.tags.clone(),
            published: article.published,
            published_at: article.published_at,
            updated_at: article.updated_at,
        }
    }
}
