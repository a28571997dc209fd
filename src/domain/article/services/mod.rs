// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Derives a unique, URL-safe slug from an article title. Only called when an
/// article is created; slugs never change afterwards.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
        }
    }

    pub async fn generate_unique_slug(&self, title: &ArticleTitle) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("article-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base_slug}-{counter}");
            counter += 1;
        }
    }
}
