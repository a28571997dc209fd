// src/presentation/http/controllers/site.rs
use crate::application::dto::SiteConfigDto;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/site",
    responses(
        (status = 200, description = "Public site configuration.", body = SiteConfigDto)
    ),
    security(()),
    tag = "System"
)]
pub async fn site_config(Extension(state): Extension<HttpState>) -> Json<SiteConfigDto> {
    Json(state.services.site_config())
}
