use caderno_core::application::{
    commands::users::BootstrapAdminCommand,
    ports::{challenge::ChallengeVerifier, cooldown::CooldownStore},
    services::{ApplicationPorts, ApplicationServices},
};
use caderno_core::config::AppConfig;
use caderno_core::infrastructure::{
    challenge::{DisabledChallengeVerifier, TurnstileVerifier},
    cooldown::{InMemoryCooldownStore, RedisCooldownStore},
    database,
    media::{LocalObjectStorage, RasterImageProcessor},
    render::{HtmlContentRenderer, HtmlDraftParser, KatexTypesetter, SyntectHighlighter},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCommentRepository, PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, token::BiscuitTokenManager,
        visitor::HmacVisitorKeyDeriver,
    },
    time::SystemClock,
    util::{DefaultSlugGenerator, UuidRandomIdGenerator},
};
use caderno_core::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let challenge: Arc<dyn ChallengeVerifier> = match config.turnstile_secret_key() {
        Some(secret) => Arc::new(TurnstileVerifier::new(
            secret,
            config.turnstile_site_key().map(str::to_string),
        )?),
        None => {
            tracing::warn!("TURNSTILE_SECRET_KEY not set; bot challenge verification disabled");
            Arc::new(DisabledChallengeVerifier::new(
                config.turnstile_site_key().map(str::to_string),
            ))
        }
    };

    let cooldowns: Arc<dyn CooldownStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("comment cooldown markers stored in redis");
            Arc::new(RedisCooldownStore::from_url(url)?)
        }
        None => Arc::new(InMemoryCooldownStore::new()),
    };

    let renderer = HtmlContentRenderer::new(Arc::new(KatexTypesetter), SyntectHighlighter::new());

    let ports = ApplicationPorts {
        user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_write_repo: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read_repo: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        comment_repo: Arc::new(PostgresCommentRepository::new(pool.clone())),
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager: Arc::new(BiscuitTokenManager::new(
            config.biscuit_private_key(),
            config.token_ttl(),
        )?),
        visitor_keys: Arc::new(HmacVisitorKeyDeriver::new(
            config.visitor_key_secret().as_bytes(),
        )?),
        renderer: Arc::new(renderer),
        draft_parser: Arc::new(HtmlDraftParser),
        storage: Arc::new(LocalObjectStorage::new(
            config.media_root().clone(),
            config.media_public_url(),
        )),
        images: Arc::new(RasterImageProcessor),
        challenge,
        cooldowns,
        clock: Arc::new(SystemClock),
        slugger: Arc::new(DefaultSlugGenerator),
        ids: Arc::new(UuidRandomIdGenerator),
    };
    let services = Arc::new(ApplicationServices::new(ports));

    if let Some(admin) = config.admin() {
        services
            .user_commands
            .bootstrap_admin(BootstrapAdminCommand {
                username: admin.username.clone(),
                password: admin.password.clone(),
            })
            .await?;
    }

    let settings = RouterSettings {
        allowed_origins: config.allowed_origins().to_vec(),
        media_root: Some(config.media_root().clone()),
    };
    let state = HttpState::new(services).with_proxy_headers(config.trust_proxy_headers());
    let app = build_router(state, settings);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
