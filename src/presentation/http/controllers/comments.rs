// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::DeleteCommentCommand,
    controllers::CommentForm,
    error::ApplicationError,
    dto::CommentDto,
};
use crate::domain::article::ArticleId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, Visitor};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitCommentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub body: String,
    #[serde(default)]
    pub anonymous: bool,
    /// Token issued by the bot-challenge widget.
    #[serde(default)]
    pub challenge_token: Option<String>,
}

impl From<SubmitCommentRequest> for CommentForm {
    fn from(request: SubmitCommentRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            body: request.body,
            anonymous: request.anonymous,
            challenge_token: request.challenge_token,
        }
    }
}

/// Comments of an article plus the calling visitor's remaining cooldown.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentThreadResponse {
    pub comments: Vec<CommentDto>,
    pub cooldown_secs: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentSubmittedResponse {
    pub comment: CommentDto,
    pub comments: Vec<CommentDto>,
    pub cooldown_secs: u32,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments, oldest first.", body = CommentThreadResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    visitor: Visitor,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<CommentThreadResponse>> {
    let article_id = ArticleId::new(article_id)
        .map_err(ApplicationError::from)
        .into_http()?;
    let thread = state
        .services
        .comment_thread(article_id, visitor.key, visitor.remote_ip)
        .await
        .into_http()?;

    Ok(Json(CommentThreadResponse {
        comments: thread.comments().to_vec(),
        cooldown_secs: thread.cooldown(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = SubmitCommentRequest,
    responses(
        (status = 201, description = "Comment stored.", body = CommentSubmittedResponse),
        (status = 400, description = "Empty comment or failed bot challenge.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No published article with that id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Cooldown still running.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Comments"
)]
pub async fn submit_comment(
    Extension(state): Extension<HttpState>,
    visitor: Visitor,
    Path(article_id): Path<i64>,
    Json(payload): Json<SubmitCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentSubmittedResponse>)> {
    let article_id = ArticleId::new(article_id)
        .map_err(ApplicationError::from)
        .into_http()?;
    let mut thread = state
        .services
        .comment_thread(article_id, visitor.key, visitor.remote_ip)
        .await
        .into_http()?;

    *thread.form_mut() = payload.into();
    let comment = thread.submit().await.into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(CommentSubmittedResponse {
            comment,
            comments: thread.comments().to_vec(),
            cooldown_secs: thread.cooldown(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete(&user, DeleteCommentCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
