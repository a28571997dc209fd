// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, SaveDraftCommand, TogglePublishCommand},
    dto::ArticleDto,
};
use crate::domain::{article::ArticleTags, draft::Draft};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Tags as a list or as the comma separated string typed in the dialog.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Csv(String),
}

impl Default for TagsInput {
    fn default() -> Self {
        TagsInput::List(Vec::new())
    }
}

impl TagsInput {
    fn into_tags(self) -> Vec<String> {
        match self {
            TagsInput::List(tags) => ArticleTags::new(tags).into_inner(),
            TagsInput::Csv(raw) => ArticleTags::from_csv(&raw).into_inner(),
        }
    }
}

/// Field set of the authoring dialog.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleDraftRequest {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Serialized editor document.
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: TagsInput,
    #[serde(default)]
    pub published: bool,
}

impl From<ArticleDraftRequest> for Draft {
    fn from(request: ArticleDraftRequest) -> Self {
        Draft {
            title: request.title,
            excerpt: request.excerpt.unwrap_or_default(),
            content: request.content,
            cover_image: request.cover_image.unwrap_or_default(),
            tags: request.tags.into_tags(),
            published: request.published,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles",
    responses(
        (status = 200, description = "Every article including drafts, newest first.", body = [ArticleDto]),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_all(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article as stored, drafts included.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_by_id(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles",
    request_body = ArticleDraftRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Draft failed validation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ArticleDraftRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = SaveDraftCommand {
        id: None,
        draft: payload.into(),
    };
    let created = state
        .services
        .article_commands
        .save_draft(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleDraftRequest,
    responses(
        (status = 200, description = "Article replaced; the slug is kept.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ArticleDraftRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = SaveDraftCommand {
        id: Some(id),
        draft: payload.into(),
    };
    state
        .services
        .article_commands
        .save_draft(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/articles/{id}/toggle-publish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Publish flag flipped.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn toggle_publish(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .toggle_publish(&user, TogglePublishCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article and its comments deleted."),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
