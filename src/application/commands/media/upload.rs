// src/application/commands/media/upload.rs
use super::{MediaCommandService, service::MAX_UPLOAD_BYTES};
use crate::{
    application::{
        dto::{AuthenticatedUser, UploadedImageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::media::{Bucket, ImageFormat},
};
use bytes::Bytes;

pub struct UploadContentImageCommand {
    pub content_type: String,
    pub body: Bytes,
}

impl MediaCommandService {
    /// Store an image inserted into article content, unchanged.
    pub async fn upload_content_image(
        &self,
        actor: &AuthenticatedUser,
        command: UploadContentImageCommand,
    ) -> ApplicationResult<UploadedImageDto> {
        let format = ImageFormat::from_content_type(&command.content_type)?;
        if command.body.is_empty() {
            return Err(ApplicationError::validation("image is empty"));
        }
        if command.body.len() > MAX_UPLOAD_BYTES {
            return Err(ApplicationError::validation("image is too large"));
        }
        let dimensions = self.images.dimensions(command.body.clone()).await?;
        tracing::debug!(by = %actor.username, ?dimensions, "content image accepted");
        self.store(Bucket::ContentImages, format, command.body, dimensions)
            .await
    }
}
