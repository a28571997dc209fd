// src/presentation/http/controllers/articles.rs
use crate::application::{
    context::ThemeContext,
    controllers::ArticleReader,
    dto::{ArticleDetailDto, ListingDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ThemePreference;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Free-text search over title, excerpt and tags.
    #[serde(default)]
    pub q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ListingParams),
    responses(
        (status = 200, description = "One page of published articles.", body = ListingDto)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListingParams>,
) -> HttpResult<Json<ListingDto>> {
    let requested = params.page.unwrap_or(1);
    let mut listing = state.services.listing();
    listing.set_query(params.q.as_deref());
    listing.go_to(requested);

    let total_pages = listing.load().await.into_http()?.total_pages;
    if total_pages > 0 && requested > total_pages {
        listing.go_to(requested);
        listing.load().await.into_http()?;
    }

    listing
        .to_dto()
        .map(Json)
        .ok_or_else(|| ApplicationError::infrastructure("listing was not loaded"))
        .into_http()
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/by-slug/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("theme" = Option<String>, Query, description = "`light` or `dark`; falls back to the `theme` cookie")
    ),
    responses(
        (status = 200, description = "Published article with rendered content.", body = ArticleDetailDto),
        (status = 404, description = "No published article with that slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    ThemePreference(theme): ThemePreference,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_reader(slug, ThemeContext::new(theme))
        .await
        .map(ArticleReader::into_detail)
        .into_http()
        .map(Json)
}
