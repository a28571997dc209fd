// src/domain/media/object.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Storage buckets. Content images and cover crops are kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ContentImages,
    Covers,
}

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::ContentImages => "blog-images",
            Bucket::Covers => "covers",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageFormat {
    pub fn from_content_type(content_type: &str) -> DomainResult<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Ok(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Ok(ImageFormat::Jpeg),
            "image/webp" => Ok(ImageFormat::Webp),
            "image/gif" => Ok(ImageFormat::Gif),
            other => Err(DomainError::Validation(format!(
                "unsupported image type: {other}"
            ))),
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif => "gif",
        }
    }
}

/// Object name inside a bucket: `<random>_<millis>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(String);

impl ObjectName {
    pub fn generate(random: &str, millis: i64, format: ImageFormat) -> DomainResult<Self> {
        if random.is_empty() || !random.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::validation("object name prefix must be alphanumeric"));
        }
        Ok(Self(format!("{random}_{millis}.{}", format.extension())))
    }

    /// Accept a stored name, rejecting anything that could leave the bucket.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let valid = !value.is_empty()
            && !value.starts_with('.')
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(DomainError::validation("invalid object name"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
