// src/presentation/http/routes.rs
use crate::application::commands::media::MAX_UPLOAD_BYTES;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, articles, auth, comments, editor, media, site},
    middleware::rate_limit::comment_rate_limit,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Base64 data URLs are a third larger than the image they carry.
const ADMIN_BODY_LIMIT: usize = MAX_UPLOAD_BYTES * 3 / 2;

#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Directory served under `/media`; not mounted when `None`.
    pub media_root: Option<PathBuf>,
}

pub fn build_router(state: HttpState, settings: RouterSettings) -> Router {
    let mut comment_routes = Router::new().route(
        "/api/v1/articles/{id}/comments",
        get(comments::list_comments).post(comments::submit_comment),
    );
    match comment_rate_limit() {
        Some(limit) => comment_routes = comment_routes.layer(limit),
        None => tracing::warn!("comment rate limiter disabled: invalid configuration"),
    }

    let admin_routes = Router::new()
        .route(
            "/api/v1/admin/articles",
            get(admin::list_articles).post(admin::create_article),
        )
        .route(
            "/api/v1/admin/articles/{id}",
            get(admin::get_article)
                .put(admin::update_article)
                .delete(admin::delete_article),
        )
        .route(
            "/api/v1/admin/articles/{id}/toggle-publish",
            post(admin::toggle_publish),
        )
        .route("/api/v1/admin/images", post(media::upload_image))
        .route("/api/v1/admin/covers", post(media::upload_cover))
        .route("/api/v1/admin/editor", post(editor::apply_commands))
        .layer(DefaultBodyLimit::max(ADMIN_BODY_LIMIT));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/site", get(site::site_config))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route("/api/v1/comments/{id}", delete(comments::delete_comment))
        .merge(comment_routes)
        .merge(admin_routes);

    if let Some(root) = settings.media_root.as_ref() {
        router = router.nest_service("/media", ServeDir::new(root));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
