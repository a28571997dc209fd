// src/domain/media/data_url.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::object::ImageFormat;
use base64::{Engine, engine::general_purpose::STANDARD};

/// A base64 `data:` URL holding an image, as produced by a file reader for
/// the crop preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn parse(input: &str) -> DomainResult<Self> {
        let rest = input
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| DomainError::validation("expected a data: URL"))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| DomainError::validation("data URL has no payload"))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| DomainError::validation("data URL must be base64 encoded"))?;
        let format = ImageFormat::from_content_type(mime)?;
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|err| DomainError::Validation(format!("invalid base64 payload: {err}")))?;
        if bytes.is_empty() {
            return Err(DomainError::validation("data URL is empty"));
        }
        Ok(Self { format, bytes })
    }

    pub fn encode(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.content_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}
