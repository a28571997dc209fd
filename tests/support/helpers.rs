// tests/support/helpers.rs
use super::mocks::{
    InMemoryArticles, InMemoryComments, InMemoryUsers, MemoryStorage, MutableClock,
    PlainPasswordHasher, ScriptedChallenge, SequentialIds, StaticTokenManager,
    ThemedPassthroughRenderer, fixed_now,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use caderno_core::application::{
    dto::AuthenticatedUser,
    ports::cooldown::CooldownStore,
    services::{ApplicationPorts, ApplicationServices},
};
use caderno_core::domain::article::{
    Article, ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTags, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use caderno_core::domain::user::UserId;
use caderno_core::infrastructure::{
    cooldown::InMemoryCooldownStore,
    media::RasterImageProcessor,
    render::HtmlDraftParser,
    security::visitor::HmacVisitorKeyDeriver,
    util::DefaultSlugGenerator,
};
use caderno_core::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;

/// Application services over in-memory adapters, with handles on the fakes.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
    pub comments: Arc<InMemoryComments>,
    pub users: Arc<InMemoryUsers>,
    pub storage: Arc<MemoryStorage>,
    pub challenge: Arc<ScriptedChallenge>,
    pub clock: Arc<MutableClock>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_cooldowns(Arc::new(InMemoryCooldownStore::new()))
    }

    pub fn with_cooldowns(cooldowns: Arc<dyn CooldownStore>) -> Self {
        let articles = Arc::new(InMemoryArticles::default());
        let comments = Arc::new(InMemoryComments::default());
        let users = Arc::new(InMemoryUsers::default());
        let storage = Arc::new(MemoryStorage::default());
        let challenge = Arc::new(ScriptedChallenge::default());
        let clock = Arc::new(MutableClock::default());

        let ports = ApplicationPorts {
            user_repo: users.clone(),
            article_write_repo: articles.clone(),
            article_read_repo: articles.clone(),
            comment_repo: comments.clone(),
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(StaticTokenManager),
            visitor_keys: Arc::new(HmacVisitorKeyDeriver::new(b"test-visitor-secret").unwrap()),
            renderer: Arc::new(ThemedPassthroughRenderer),
            draft_parser: Arc::new(HtmlDraftParser),
            storage: storage.clone(),
            images: Arc::new(RasterImageProcessor),
            challenge: challenge.clone(),
            cooldowns,
            clock: clock.clone(),
            slugger: Arc::new(DefaultSlugGenerator),
            ids: Arc::new(SequentialIds::default()),
        };

        Self {
            services: Arc::new(ApplicationServices::new(ports)),
            articles,
            comments,
            users,
            storage,
            challenge,
            clock,
        }
    }

    pub fn router(&self) -> axum::Router {
        self.router_with_proxy_headers(true)
    }

    pub fn router_with_proxy_headers(&self, trust: bool) -> axum::Router {
        build_router(
            HttpState::new(Arc::clone(&self.services)).with_proxy_headers(trust),
            RouterSettings {
                allowed_origins: vec!["http://localhost:3000".into()],
                media_root: None,
            },
        )
    }

    pub fn admin(&self) -> AuthenticatedUser {
        StaticTokenManager::admin()
    }

    /// Insert an article directly; published ones are stamped `minutes`
    /// after the fixed clock so ordering is predictable.
    pub async fn seed_article(&self, title: &str, published: bool, minutes: i64) -> Article {
        let at = fixed_now() + Duration::minutes(minutes);
        let slug = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        self.articles
            .insert(NewArticle {
                title: ArticleTitle::new(title).unwrap(),
                slug: ArticleSlug::new(slug).unwrap(),
                excerpt: ArticleExcerpt::parse(Some(format!("Sobre {title}"))),
                content: ArticleContent::new(format!("<p>{title}</p>")).unwrap(),
                cover_image: None,
                tags: ArticleTags::new(["notas"]),
                published,
                published_at: published.then_some(at),
                author_id: UserId::new(1).unwrap(),
                created_at: at,
                updated_at: at,
            })
            .await
            .unwrap()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", "203.0.113.10");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status.
pub async fn assert_error_response(response: axum::response::Response, expected: StatusCode) -> Value {
    let (status, json) = read_json(response).await;
    assert_eq!(status, expected, "unexpected body: {json}");
    assert!(json.get("error").and_then(Value::as_str).is_some());
    assert!(
        !json
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("")
            .is_empty()
    );
    json
}

/// A small solid-colour PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
