// src/infrastructure/media/image_processor.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::image::{CroppedImage, ImageProcessor},
};
use crate::domain::media::{AspectRatio, PercentArea};
use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, GenericImageView, ImageReader, codecs::jpeg::JpegEncoder, imageops::FilterType};
use std::io::Cursor;

const JPEG_QUALITY: u8 = 90;

/// Decodes, crops and re-encodes covers as JPEG on the blocking pool.
#[derive(Debug, Default, Clone)]
pub struct RasterImageProcessor;

fn decode(source: &[u8]) -> ApplicationResult<DynamicImage> {
    image::load_from_memory(source)
        .map_err(|err| ApplicationError::validation(format!("unreadable image: {err}")))
}

fn crop_and_encode(
    source: &[u8],
    area: PercentArea,
    aspect: AspectRatio,
) -> ApplicationResult<CroppedImage> {
    let image = decode(source)?;
    let (natural_width, natural_height) = image.dimensions();
    let region = area.to_pixels(natural_width, natural_height, aspect);
    let (width, height) = region.output_size(aspect);

    let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
    let scaled = if (cropped.width(), cropped.height()) == (width, height) {
        cropped
    } else {
        cropped.resize_exact(width, height, FilterType::Lanczos3)
    };

    let mut body = Vec::new();
    DynamicImage::ImageRgb8(scaled.to_rgb8())
        .write_with_encoder(JpegEncoder::new_with_quality(&mut body, JPEG_QUALITY))
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    Ok(CroppedImage {
        region,
        width,
        height,
        content_type: "image/jpeg",
        body: Bytes::from(body),
    })
}

async fn blocking<T, F>(job: F) -> ApplicationResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> ApplicationResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
}

#[async_trait]
impl ImageProcessor for RasterImageProcessor {
    async fn crop(
        &self,
        source: Bytes,
        area: PercentArea,
        aspect: AspectRatio,
    ) -> ApplicationResult<CroppedImage> {
        blocking(move || crop_and_encode(&source, area, aspect)).await
    }

    async fn dimensions(&self, source: Bytes) -> ApplicationResult<(u32, u32)> {
        blocking(move || {
            ImageReader::new(Cursor::new(source.as_ref()))
                .with_guessed_format()
                .map_err(|err| ApplicationError::validation(format!("unreadable image: {err}")))?
                .into_dimensions()
                .map_err(|err| ApplicationError::validation(format!("unreadable image: {err}")))
        })
        .await
    }
}
