// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// Titles are stored trimmed; a blank title is rejected.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value
            .chars()
            .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits and '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serialized rich-document HTML as emitted by the draft editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExcerpt(String);

impl ArticleExcerpt {
    /// Blank excerpts collapse to `None`.
    pub fn parse(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Reference to a cover image in object storage (a public URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if !(value.starts_with("http://") || value.starts_with("https://") || value.starts_with('/'))
        {
            return Err(DomainError::Validation(
                "cover image must be an absolute URL or path".into(),
            ));
        }
        Ok(Some(Self(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Ordered list of free-text tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleTags(Vec<String>);

impl ArticleTags {
    /// Trims every entry, drops blanks and removes case-insensitive duplicates,
    /// keeping the first spelling.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let tags = values
            .into_iter()
            .filter_map(|tag| {
                let tag = tag.as_ref().trim();
                if tag.is_empty() || !seen.insert(tag.to_lowercase()) {
                    None
                } else {
                    Some(tag.to_string())
                }
            })
            .collect();
        Self(tags)
    }

    /// Parse the comma separated form used by the authoring dialog.
    pub fn from_csv(input: &str) -> Self {
        Self::new(input.split(','))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub fn contains_fragment(&self, needle_lower: &str) -> bool {
        self.0
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        let title = ArticleTitle::new("  Álgebra Linear  ").unwrap();
        assert_eq!(title.as_str(), "Álgebra Linear");
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert!(ArticleSlug::new("algebra-linear-2").is_ok());
        assert!(ArticleSlug::new("Algebra").is_err());
        assert!(ArticleSlug::new("a b").is_err());
    }

    #[test]
    fn blank_excerpt_is_none() {
        assert!(ArticleExcerpt::parse(Some("  ".into())).is_none());
        assert!(ArticleExcerpt::parse(None).is_none());
        assert_eq!(
            ArticleExcerpt::parse(Some(" resumo ".into())).unwrap().as_str(),
            "resumo"
        );
    }

    #[test]
    fn cover_image_requires_url() {
        assert!(CoverImage::parse(Some("".into())).unwrap().is_none());
        assert!(CoverImage::parse(Some("ftp://x".into())).is_err());
        assert!(CoverImage::parse(Some("https://cdn/x.jpg".into())).unwrap().is_some());
    }

    #[test]
    fn tags_are_normalised() {
        let tags = ArticleTags::from_csv(" Rust, math ,, rust ,Física");
        assert_eq!(tags.as_slice(), &["Rust", "math", "Física"]);
        assert!(tags.contains_fragment("físi"));
        assert!(!tags.contains_fragment("go"));
    }
}
