// src/presentation/http/controllers/media.rs
use crate::application::{commands::media::UploadContentImageCommand, dto::UploadedImageDto};
use crate::domain::media::{Point, Size};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderMap, StatusCode, header},
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl From<Dimensions> for Size {
    fn from(d: Dimensions) -> Self {
        Size::new(d.width, d.height)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Final state of the crop dialog.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CoverCropRequest {
    /// `data:image/...;base64,` preview of the selected file.
    pub image: String,
    /// Preview size as displayed at zoom 1.
    pub media: Dimensions,
    /// Size of the element hosting the cropper.
    pub container: Dimensions,
    #[serde(default)]
    pub crop: Offset,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_zoom() -> f64 {
    1.0
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CoverResponse {
    pub url: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/images",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "image/*"),
    responses(
        (status = 201, description = "Image stored.", body = UploadedImageDto),
        (status = 400, description = "Unsupported, empty or oversized image.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Media"
)]
pub async fn upload_image(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResult<(StatusCode, Json<UploadedImageDto>)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| HttpError::bad_request("Content-Type header is required"))?;

    let uploaded = state
        .services
        .media_commands
        .upload_content_image(
            &user,
            UploadContentImageCommand {
                content_type: content_type.to_string(),
                body,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(uploaded)))
}

/// Runs the whole crop dialog server side: select, open, pan, zoom, confirm.
#[utoipa::path(
    post,
    path = "/api/v1/admin/covers",
    request_body = CoverCropRequest,
    responses(
        (status = 201, description = "Cropped cover stored.", body = CoverResponse),
        (status = 400, description = "Invalid image or crop geometry.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Media"
)]
pub async fn upload_cover(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CoverCropRequest>,
) -> HttpResult<(StatusCode, Json<CoverResponse>)> {
    let mut session = state.services.crop_session(None);
    session.select_data_url(&payload.image).into_http()?;
    session
        .open_cropper(payload.media.into(), payload.container.into())
        .into_http()?;
    session.set_zoom(payload.zoom).into_http()?;
    session
        .set_crop(Point {
            x: payload.crop.x,
            y: payload.crop.y,
        })
        .into_http()?;

    let url = session.confirm(&user).await.into_http()?;
    Ok((StatusCode::CREATED, Json(CoverResponse { url })))
}
