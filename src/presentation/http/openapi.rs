// src/presentation/http/openapi.rs
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet, env, fs::File, io::BufWriter, path::Path, sync::OnceLock,
    time::SystemTime,
};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::site::site_config,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::submit_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::admin::list_articles,
        crate::presentation::http::controllers::admin::get_article,
        crate::presentation::http::controllers::admin::create_article,
        crate::presentation::http::controllers::admin::update_article,
        crate::presentation::http::controllers::admin::toggle_publish,
        crate::presentation::http::controllers::admin::delete_article,
        crate::presentation::http::controllers::media::upload_image,
        crate::presentation::http::controllers::media::upload_cover,
        crate::presentation::http::controllers::editor::apply_commands
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::articles::ListingParams,
            crate::presentation::http::controllers::comments::SubmitCommentRequest,
            crate::presentation::http::controllers::comments::CommentThreadResponse,
            crate::presentation::http::controllers::comments::CommentSubmittedResponse,
            crate::presentation::http::controllers::admin::ArticleDraftRequest,
            crate::presentation::http::controllers::admin::TagsInput,
            crate::presentation::http::controllers::media::CoverCropRequest,
            crate::presentation::http::controllers::media::CoverResponse,
            crate::presentation::http::controllers::media::Dimensions,
            crate::presentation::http::controllers::media::Offset,
            crate::presentation::http::controllers::editor::EditorRequest,
            crate::application::context::Theme,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::ListingDto,
            crate::application::dto::ListingStateKind,
            crate::application::dto::PageLinkDto,
            crate::application::dto::CommentDto,
            crate::application::dto::UploadedImageDto,
            crate::application::dto::EditorStateDto,
            crate::application::dto::ActiveFormatsDto,
            crate::application::dto::SiteConfigDto,
            crate::application::dto::LanguageDto
        )
    ),
    tags(
        (name = "Auth", description = "Admin sign-in"),
        (name = "Articles", description = "Public listing and article pages"),
        (name = "Comments", description = "Reader comments"),
        (name = "Admin", description = "Article authoring"),
        (name = "Media", description = "Image and cover uploads"),
        (name = "Editor", description = "Headless draft editor"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Caderno API",
        description = "Personal blog backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:8080") {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

struct OpenApiDocument {
    bytes: Bytes,
    etag: String,
    last_modified: String,
}

fn document() -> &'static OpenApiDocument {
    static DOCUMENT: OnceLock<OpenApiDocument> = OnceLock::new();
    DOCUMENT.get_or_init(|| {
        let bytes = Bytes::from(serde_json::to_vec(&ApiDoc::openapi()).unwrap_or_default());
        let hash = blake3::hash(&bytes);
        OpenApiDocument {
            etag: format!("\"{}\"", &hash.to_hex()[..16]),
            last_modified: httpdate::fmt_http_date(SystemTime::now()),
            bytes,
        }
    })
}

/// Strong or weak forms of the same tag compare equal; `*` matches anything.
fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    let Some(value) = headers.get(header::IF_NONE_MATCH).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    value.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.trim_start_matches("W/").trim_start_matches("w/") == etag
    })
}

fn not_modified(headers: &HeaderMap, doc: &OpenApiDocument) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        return if_none_match(headers, &doc.etag);
    }
    headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|since| since == doc.last_modified)
}

pub async fn serve_openapi(headers: HeaderMap) -> Response {
    let doc = document();
    let cache_headers = [
        (header::ETAG, doc.etag.clone()),
        (header::LAST_MODIFIED, doc.last_modified.clone()),
    ];
    if not_modified(&headers, doc) {
        return (StatusCode::NOT_MODIFIED, cache_headers).into_response();
    }
    (
        StatusCode::OK,
        cache_headers,
        [(header::CONTENT_TYPE, "application/json".to_string())],
        Body::from(doc.bytes.clone()),
    )
        .into_response()
}

/// Swagger UI reads the document from [`OPENAPI_PATH`], which is served by
/// [`serve_openapi`] with cache validators.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").config(Config::from(OPENAPI_PATH));
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route(OPENAPI_PATH, get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn document_lists_every_route_group() {
        let spec = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/articles",
            "/api/v1/articles/by-slug/{slug}",
            "/api/v1/articles/{id}/comments",
            "/api/v1/admin/covers",
            "/api/v1/admin/editor",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[tokio::test]
    async fn matching_etag_returns_not_modified() {
        let mut headers = HeaderMap::new();
        let weak = format!("W/{}", document().etag);
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_str(&weak).unwrap());
        let response = serve_openapi(headers).await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn stale_etag_wins_over_matching_date() {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static("\"stale\""));
        headers.insert(
            header::IF_MODIFIED_SINCE,
            HeaderValue::from_str(&document().last_modified).unwrap(),
        );
        let response = serve_openapi(headers).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
    }
}
