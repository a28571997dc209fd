// src/application/commands/media/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::UploadedImageDto,
        error::ApplicationResult,
        ports::{
            image::ImageProcessor, storage::ObjectStorage, time::Clock, util::RandomIdGenerator,
        },
    },
    domain::media::{Bucket, ImageFormat, ObjectName},
};
use bytes::Bytes;

/// Largest upload accepted from the editor or the cover cropper.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct MediaCommandService {
    pub(super) storage: Arc<dyn ObjectStorage>,
    pub(super) images: Arc<dyn ImageProcessor>,
    pub(super) ids: Arc<dyn RandomIdGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MediaCommandService {
    pub fn new(
        storage: Arc<dyn ObjectStorage>,
        images: Arc<dyn ImageProcessor>,
        ids: Arc<dyn RandomIdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            images,
            ids,
            clock,
        }
    }

    pub(super) async fn store(
        &self,
        bucket: Bucket,
        format: ImageFormat,
        body: Bytes,
        dimensions: (u32, u32),
    ) -> ApplicationResult<UploadedImageDto> {
        let name = ObjectName::generate(
            &self.ids.random_id(),
            self.clock.now().timestamp_millis(),
            format,
        )?;
        let size = body.len();
        let url = self
            .storage
            .put(bucket, &name, body, format.content_type())
            .await?;
        tracing::info!(%bucket, name = %name, size, "image stored");

        Ok(UploadedImageDto {
            url,
            bucket: bucket.as_str().to_string(),
            name: name.as_str().to_string(),
            content_type: format.content_type().to_string(),
            width: Some(dimensions.0),
            height: Some(dimensions.1),
        })
    }
}
