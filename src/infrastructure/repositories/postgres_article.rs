// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSlug, ArticleTags, ArticleTitle, ArticleUpdate, ArticleWriteRepository, CoverImage,
    NewArticle, PageWindow,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, slug, excerpt, content, cover_image, tags, published, \
     published_at, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    cover_image: Option<String>,
    tags: Option<Vec<String>>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            excerpt: ArticleExcerpt::parse(row.excerpt),
            content: ArticleContent::new(row.content)?,
            cover_image: CoverImage::parse(row.cover_image)?,
            tags: ArticleTags::new(row.tags.unwrap_or_default()),
            published: row.published,
            published_at: row.published_at,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            excerpt,
            content,
            cover_image,
            tags,
            published,
            published_at,
            author_id,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, slug, excerpt, content, cover_image, tags, published, published_at, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(slug.as_str())
            .bind(excerpt.map(ArticleExcerpt::into_inner))
            .bind(content.as_str())
            .bind(cover_image.map(CoverImage::into_inner))
            .bind(tags.into_inner())
            .bind(published)
            .bind(published_at)
            .bind(i64::from(author_id))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            excerpt,
            content,
            cover_image,
            tags,
            published,
            published_at,
            updated_at,
        } = update;

        let sql = format!(
            "UPDATE articles
             SET title = $2, excerpt = $3, content = $4, cover_image = $5, tags = $6,
                 published = $7, published_at = $8, updated_at = $9
             WHERE id = $1
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .bind(title.as_str())
            .bind(excerpt.map(ArticleExcerpt::into_inner))
            .bind(content.as_str())
            .bind(cover_image.map(CoverImage::into_inner))
            .bind(tags.into_inner())
            .bind(published)
            .bind(published_at)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/// `%fragment%` with LIKE wildcards in the fragment escaped.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl PostgresArticleReadRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, pattern: Option<&'a str>) {
        builder.push(" WHERE published = TRUE");
        if let Some(pattern) = pattern {
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern);
            builder.push(" OR excerpt ILIKE ");
            builder.push_bind(pattern);
            builder.push(" OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE ");
            builder.push_bind(pattern);
            builder.push("))");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn search_published(
        &self,
        filter: &ArticleFilter,
        window: PageWindow,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let pattern = filter.query.as_deref().map(like_pattern);

        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(1) FROM articles");
        Self::apply_conditions(&mut count, pattern.as_deref());
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut select, pattern.as_deref());
        select.push(" ORDER BY published_at DESC NULLS LAST, id DESC LIMIT ");
        select.push_bind(i64::from(window.limit));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(window.offset).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((articles, total.max(0) as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
