// src/application/ports/image.rs
use crate::application::ApplicationResult;
use crate::domain::media::{AspectRatio, PercentArea, PixelRegion};
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct CroppedImage {
    /// Region taken from the source, in source pixels.
    pub region: PixelRegion,
    pub width: u32,
    pub height: u32,
    pub content_type: &'static str,
    pub body: Bytes,
}

#[async_trait]
pub trait ImageProcessor: Send + Sync {
    /// Cut `area` out of the encoded source image at the exact `aspect` and
    /// re-encode the result.
    async fn crop(
        &self,
        source: Bytes,
        area: PercentArea,
        aspect: AspectRatio,
    ) -> ApplicationResult<CroppedImage>;

    /// Natural pixel size of an encoded image.
    async fn dimensions(&self, source: Bytes) -> ApplicationResult<(u32, u32)>;
}
