// src/application/controllers/crop_session.rs
use std::sync::Arc;

use bytes::Bytes;

use crate::{
    application::{
        commands::media::{MAX_UPLOAD_BYTES, MediaCommandService, UploadCoverCommand},
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::media::{AspectRatio, CropView, DataUrl, ImageFormat, Point, Size},
};

#[derive(Debug, Clone)]
pub enum CropStage {
    Idle,
    /// A local file was read for preview; no upload yet.
    FileSelected { preview: DataUrl },
    Cropping { preview: DataUrl, view: CropView },
    Uploading { preview: DataUrl, view: CropView },
}

/// Cover image dialog: select, crop, upload.
pub struct CropSession {
    media: Arc<MediaCommandService>,
    aspect: AspectRatio,
    cover: Option<String>,
    stage: CropStage,
    last_error: Option<String>,
}

impl CropSession {
    pub fn new(media: Arc<MediaCommandService>, cover: Option<String>) -> Self {
        Self {
            media,
            aspect: AspectRatio::COVER,
            cover,
            stage: CropStage::Idle,
            last_error: None,
        }
    }

    pub fn stage(&self) -> &CropStage {
        &self.stage
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Cover URL in effect: the last successful upload, or the initial one.
    pub fn result(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn view(&self) -> Option<&CropView> {
        match &self.stage {
            CropStage::Cropping { view, .. } | CropStage::Uploading { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn select_file(&mut self, bytes: Vec<u8>, content_type: &str) -> ApplicationResult<()> {
        let format = ImageFormat::from_content_type(content_type)?;
        self.select(DataUrl::new(format, bytes))
    }

    pub fn select_data_url(&mut self, input: &str) -> ApplicationResult<()> {
        self.select(DataUrl::parse(input)?)
    }

    fn select(&mut self, preview: DataUrl) -> ApplicationResult<()> {
        if matches!(self.stage, CropStage::Uploading { .. }) {
            return Err(ApplicationError::conflict("an upload is in progress"));
        }
        if preview.bytes.is_empty() {
            return Err(ApplicationError::validation("image is empty"));
        }
        if preview.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApplicationError::validation("image is too large"));
        }
        self.last_error = None;
        self.stage = CropStage::FileSelected { preview };
        Ok(())
    }

    /// `media` is the preview's displayed size at zoom 1.
    pub fn open_cropper(&mut self, media: Size, container: Size) -> ApplicationResult<CropView> {
        let preview = match std::mem::replace(&mut self.stage, CropStage::Idle) {
            CropStage::FileSelected { preview } => preview,
            other => {
                self.stage = other;
                return Err(ApplicationError::conflict("select an image first"));
            }
        };
        let view = CropView::fitted(media, container, self.aspect);
        if let Err(err) = view.validate() {
            self.stage = CropStage::FileSelected { preview };
            return Err(err.into());
        }
        self.stage = CropStage::Cropping { preview, view };
        Ok(view)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> ApplicationResult<()> {
        self.cropping_view()?.set_zoom(zoom);
        Ok(())
    }

    pub fn set_crop(&mut self, crop: Point) -> ApplicationResult<()> {
        self.cropping_view()?.set_crop(crop);
        Ok(())
    }

    fn cropping_view(&mut self) -> ApplicationResult<&mut CropView> {
        match &mut self.stage {
            CropStage::Cropping { view, .. } => Ok(view),
            _ => Err(ApplicationError::conflict("cropper is not open")),
        }
    }

    /// Upload the selected region. On failure the dialog returns to cropping
    /// with the selection intact.
    pub async fn confirm(&mut self, actor: &AuthenticatedUser) -> ApplicationResult<String> {
        let (preview, view) = match std::mem::replace(&mut self.stage, CropStage::Idle) {
            CropStage::Cropping { preview, view } => (preview, view),
            other => {
                self.stage = other;
                return Err(ApplicationError::conflict("cropper is not open"));
            }
        };

        let command = UploadCoverCommand {
            source: Bytes::from(preview.bytes.clone()),
            area: view.percent_area(),
            aspect: self.aspect,
        };
        self.stage = CropStage::Uploading { preview, view };

        match self.media.upload_cover(actor, command).await {
            Ok(uploaded) => {
                self.last_error = None;
                self.cover = Some(uploaded.url.clone());
                self.stage = CropStage::Idle;
                Ok(uploaded.url)
            }
            Err(err) => {
                tracing::warn!(error = %err, "cover upload failed");
                self.last_error = Some(err.to_string());
                if let CropStage::Uploading { preview, view } =
                    std::mem::replace(&mut self.stage, CropStage::Idle)
                {
                    self.stage = CropStage::Cropping { preview, view };
                }
                Err(err)
            }
        }
    }

    /// Discard preview and crop state. The current cover is kept.
    pub fn cancel(&mut self) {
        if !matches!(self.stage, CropStage::Uploading { .. }) {
            self.last_error = None;
            self.stage = CropStage::Idle;
        }
    }

    /// Drop the cover altogether.
    pub fn clear_cover(&mut self) {
        self.cancel();
        self.cover = None;
    }
}
