// src/domain/draft/state.rs
use crate::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleTags, ArticleTitle, CoverImage,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::draft::serialize::to_html;
use crate::domain::draft::document::Document;

/// Field set held by the authoring dialog while it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: to_html(&Document::new()),
            cover_image: String::new(),
            tags: Vec::new(),
            published: false,
        }
    }
}

/// Typed fields of a draft that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub title: ArticleTitle,
    pub excerpt: Option<ArticleExcerpt>,
    pub content: ArticleContent,
    pub cover_image: Option<CoverImage>,
    pub tags: ArticleTags,
    pub published: bool,
}

impl Draft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.as_str().to_string(),
            excerpt: article
                .excerpt
                .as_ref()
                .map(|e| e.as_str().to_string())
                .unwrap_or_default(),
            content: article.content.as_str().to_string(),
            cover_image: article
                .cover_image
                .as_ref()
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            tags: article.tags.as_slice().to_vec(),
            published: article.published,
        }
    }

    pub fn set_tags_csv(&mut self, csv: &str) {
        self.tags = ArticleTags::from_csv(csv).into_inner();
    }

    pub fn tags_csv(&self) -> String {
        self.tags.join(", ")
    }

    pub fn validate(self) -> DomainResult<ValidatedDraft> {
        let title = ArticleTitle::new(self.title)?;
        if self.content.trim() == to_html(&Document::new()) {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        let content = ArticleContent::new(self.content)?;
        Ok(ValidatedDraft {
            title,
            excerpt: ArticleExcerpt::parse(Some(self.excerpt)),
            content,
            cover_image: CoverImage::parse(Some(self.cover_image))?,
            tags: ArticleTags::new(self.tags),
            published: self.published,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_draft_fails_validation() {
        let draft = Draft {
            title: "Olá".into(),
            ..Draft::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn tags_csv_is_normalised() {
        let mut draft = Draft::default();
        draft.set_tags_csv("rust, , Rust, wasm");
        assert_eq!(draft.tags, vec!["rust", "wasm"]);
        assert_eq!(draft.tags_csv(), "rust, wasm");
    }

    #[test]
    fn validated_draft_collapses_blank_optionals() {
        let draft = Draft {
            title: " Séries de Fourier ".into(),
            content: "<p>$$f(x)$$</p>".into(),
            excerpt: "  ".into(),
            ..Draft::default()
        };
        let valid = draft.validate().unwrap();
        assert_eq!(valid.title.as_str(), "Séries de Fourier");
        assert!(valid.excerpt.is_none());
        assert!(valid.cover_image.is_none());
    }
}
