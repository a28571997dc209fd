// src/application/commands/media/cover.rs
use super::{MediaCommandService, service::MAX_UPLOAD_BYTES};
use crate::{
    application::{
        dto::{AuthenticatedUser, UploadedImageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::media::{AspectRatio, Bucket, ImageFormat, PercentArea},
};
use bytes::Bytes;

pub struct UploadCoverCommand {
    pub source: Bytes,
    pub area: PercentArea,
    pub aspect: AspectRatio,
}

impl MediaCommandService {
    /// Crop the selected area out of the source image and store it as a cover.
    pub async fn upload_cover(
        &self,
        actor: &AuthenticatedUser,
        command: UploadCoverCommand,
    ) -> ApplicationResult<UploadedImageDto> {
        if command.source.len() > MAX_UPLOAD_BYTES {
            return Err(ApplicationError::validation("image is too large"));
        }
        let cropped = self
            .images
            .crop(command.source, command.area, command.aspect)
            .await?;
        tracing::debug!(
            by = %actor.username,
            region = ?cropped.region,
            width = cropped.width,
            height = cropped.height,
            "cover cropped"
        );
        let format = ImageFormat::from_content_type(cropped.content_type)?;
        self.store(
            Bucket::Covers,
            format,
            cropped.body,
            (cropped.width, cropped.height),
        )
        .await
    }
}
