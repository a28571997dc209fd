// src/presentation/http/controllers/editor.rs
use crate::application::{commands::editor::ApplyEditorCommands, dto::EditorStateDto};
use crate::domain::draft::EditorCommand;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EditorRequest {
    /// Current editor content; an empty document when absent.
    #[serde(default)]
    pub content: Option<String>,
    /// Commands such as `{"command":"toggle","toggle":{"kind":"mark","mark":"bold"}}`.
    #[schema(value_type = Vec<Object>)]
    pub commands: Vec<EditorCommand>,
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/editor",
    request_body = EditorRequest,
    responses(
        (status = 200, description = "Editor state after the commands ran.", body = EditorStateDto),
        (status = 400, description = "Invalid command.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Editor"
)]
pub async fn apply_commands(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<EditorRequest>,
) -> HttpResult<Json<EditorStateDto>> {
    tracing::debug!(by = %user.username, commands = payload.commands.len(), "editor commands");
    state
        .services
        .editor_commands
        .apply(ApplyEditorCommands {
            content: payload.content,
            commands: payload.commands,
        })
        .into_http()
        .map(Json)
}
